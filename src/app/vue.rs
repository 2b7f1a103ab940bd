// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Deux panneaux monospace alignés à droite : énoncé (fenêtre de queue)
//   + réponse, comme un écran de calculatrice
// - Pavé 5×4 + flèches d'historique ; les légendes des boutons SONT les
//   symboles de touches du noyau
// - Clavier physique : chiffres/opérateurs/point tapés, Enter = égal,
//   Backspace = ⌫, flèches = historique (Échap est géré dans app.rs)

use eframe::egui;

use super::etat::AppCalc;

/// Disposition du pavé (lignes × colonnes).
const PAVE: [[&str; 4]; 5] = [
    ["AC", "n²", "⌫", "÷"],
    ["7", "8", "9", "×"],
    ["4", "5", "6", "-"],
    ["1", "2", "3", "+"],
    ["0", ".", "Ans", "="],
];

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        self.touches_clavier(ui);

        ui.heading("Calculatrice clavier");
        ui.add_space(6.0);

        let enonce = self.enonce_affiche().to_string();
        Self::champ_ecran(ui, "ecran_enonce", &enonce);
        Self::champ_ecran(ui, "ecran_reponse", &self.reponse);

        ui.add_space(8.0);
        ui.separator();
        ui.add_space(8.0);

        // Flèches d'historique
        ui.horizontal(|ui| {
            self.bouton(ui, "^");
            self.bouton(ui, "v");

            let rappels = self.historique().len();
            if rappels > 0 {
                ui.weak(format!("{rappels} rappel(s)"));
            }
        });

        ui.add_space(6.0);
        self.ui_pave(ui);
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_calculatrice")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for ligne in PAVE {
                    for legende in ligne {
                        self.bouton(ui, legende);
                    }
                    ui.end_row();
                }
            });
    }

    fn bouton(&mut self, ui: &mut egui::Ui, legende: &str) {
        let resp = ui.add_sized([56.0, 40.0], egui::Button::new(legende));
        if resp.clicked() {
            self.toucher(legende);
        }
    }

    /// Panneau d'écran : cadre monospace, contenu aligné à droite.
    fn champ_ecran(ui: &mut egui::Ui, id: &str, contenu: &str) {
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.push_id(id, |ui| {
                    ui.set_min_width(ui.available_width());
                    ui.set_min_height(ui.text_style_height(&egui::TextStyle::Monospace));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.monospace(contenu);
                    });
                });
            });
    }

    /// Clavier physique : chaque événement est traduit vers son symbole
    /// de pavé, puis relayé comme un clic.
    fn touches_clavier(&mut self, ui: &mut egui::Ui) {
        let mut symboles: Vec<&'static str> = Vec::new();

        ui.input(|i| {
            for ev in &i.events {
                match ev {
                    egui::Event::Text(texte) => {
                        for c in texte.chars() {
                            if let Some(s) = symbole_depuis_caractere(c) {
                                symboles.push(s);
                            }
                        }
                    }
                    egui::Event::Key {
                        key, pressed: true, ..
                    } => match key {
                        egui::Key::Enter => symboles.push("="),
                        egui::Key::Backspace => symboles.push("⌫"),
                        egui::Key::ArrowUp => symboles.push("^"),
                        egui::Key::ArrowDown => symboles.push("v"),
                        _ => {}
                    },
                    _ => {}
                }
            }
        });

        for s in symboles {
            self.toucher(s);
        }
    }
}

/// Traduction caractère tapé -> symbole de touche du pavé.
fn symbole_depuis_caractere(c: char) -> Option<&'static str> {
    match c {
        '0' => Some("0"),
        '1' => Some("1"),
        '2' => Some("2"),
        '3' => Some("3"),
        '4' => Some("4"),
        '5' => Some("5"),
        '6' => Some("6"),
        '7' => Some("7"),
        '8' => Some("8"),
        '9' => Some("9"),
        '+' => Some("+"),
        '-' => Some("-"),
        '*' | '×' => Some("×"),
        '/' | '÷' => Some("÷"),
        '.' => Some("."),
        '=' => Some("="),
        _ => None,
    }
}
