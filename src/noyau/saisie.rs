// src/noyau/saisie.rs
//
// Machine à états de saisie : le tampon d'expression + l'état « vient de
// calculer ». Chaque touche est traitée en une transition atomique, dans
// l'ordre strict :
//
//   verrou carré -> moins de tête -> garde double-moins -> résolution
//   double-moins -> garde opérateurs consécutifs -> reprise post-calcul
//   -> zéro décimal -> ajout/remplacement -> taille des zéros -> commit
//
// Tout rejet est un no-op silencieux : politique UX, pas une erreur.

use tracing::debug;

use super::eval::evaluer_expression;
use super::format::format_resultat;
use super::historique::Historique;
use super::jetons::{classer, est_operateur, Commande, Touche};

/// Mise à jour d'affichage rendue au consommateur après chaque touche.
///
/// `expression` est le tampon complet, non tronqué : la fenêtre d'écran
/// (troncature de queue) appartient à la vue.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Affichage {
    pub expression: String,
    pub resultat: String,
}

/// Queue du tampon, étiquetée une fois par transition.
/// Remplace les inspections de suffixe répétées règle par règle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Fin {
    Zero,                // tampon == "0" (état de départ)
    MoinsSeul,           // tampon == "-" (amorce d'un nombre négatif)
    Chiffre,
    Point,
    Operateur(char),     // dernier caractère opérateur, précédent non-opérateur
    MoinsApresOperateur, // « <op>- » : bascule de signe en attente
    Carre,
}

/// Racine d'agrégat : tampon, drapeau post-calcul, dernier résultat,
/// résultat affiché et historique. Une instance par session, possédée par
/// le fil d'événements de l'hôte.
#[derive(Clone, Debug)]
pub struct Session {
    tampon: String,
    juste_calcule: bool,
    dernier_resultat: f64,
    affiche_resultat: String,
    historique: Historique,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            tampon: "0".to_string(),
            juste_calcule: false,
            dernier_resultat: 0.0,
            affiche_resultat: String::new(),
            historique: Historique::default(),
        }
    }
}

impl Session {
    /// Point d'entrée unique : traite un symbole de touche et rend
    /// l'affichage à jour. Symbole inconnu => aucun changement.
    pub fn soumettre(&mut self, symbole: &str) -> Affichage {
        if let Some(touche) = classer(symbole) {
            self.traiter(touche);
        }
        self.affichage()
    }

    pub fn affichage(&self) -> Affichage {
        Affichage {
            expression: self.tampon.clone(),
            resultat: self.affiche_resultat.clone(),
        }
    }

    /// État de rappel, de la plus ancienne à la plus récente.
    pub fn historique(&self) -> &[String] {
        self.historique.entrees()
    }

    pub fn dernier_resultat(&self) -> f64 {
        self.dernier_resultat
    }

    fn traiter(&mut self, touche: Touche) {
        // Hors « = » et opérateur, le résultat affiché est consommé
        // (la reprise post-calcul lit ce qui reste).
        if !matches!(
            touche,
            Touche::Commande(Commande::Egal) | Touche::Operateur(_)
        ) {
            self.affiche_resultat.clear();
        }

        // Navigation : le curseur n'est pas remis ; le tampon prend
        // l'entrée visée, no-op au bord.
        match touche {
            Touche::Commande(Commande::HistHaut) => {
                if let Some(entree) = self.historique.monter() {
                    self.tampon = entree.to_string();
                }
                return;
            }
            Touche::Commande(Commande::HistBas) => {
                if let Some(entree) = self.historique.descendre() {
                    self.tampon = entree.to_string();
                }
                return;
            }
            _ => {}
        }

        // Toute autre touche repart de l'entrée la plus récente.
        self.historique.remettre_a_la_fin();

        match touche {
            Touche::Commande(Commande::Efface) => self.effacer(),
            Touche::Commande(Commande::Retour) => self.retour(),
            Touche::Commande(Commande::Egal) => self.egal(),
            Touche::Commande(Commande::Reponse) => self.reponse(),
            Touche::Commande(_) => {}
            _ => self.inserer(touche),
        }

        debug_assert!(
            est_valide(&self.tampon),
            "tampon invalide après transition: {:?}",
            self.tampon
        );
    }

    /// Règles d'insertion (chiffre / opérateur / point / carré), dans
    /// l'ordre strict de l'en-tête de fichier.
    fn inserer(&mut self, touche: Touche) {
        let fin = self.fin();

        // 1) verrou carré : après « ² », seul un opérateur prolonge
        if fin == Fin::Carre && !matches!(touche, Touche::Operateur(_)) {
            return;
        }

        // 2) moins de tête : « 0 » + '-' => amorce d'un nombre négatif
        if fin == Fin::Zero && touche == Touche::Operateur('-') {
            self.tampon = "-".to_string();
            return;
        }

        // 3) garde double-moins : une seule bascule de signe en attente
        if fin == Fin::MoinsApresOperateur && matches!(touche, Touche::Operateur(_)) {
            return;
        }

        // 4) résolution double-moins : « -- » devient « + »
        //    (ou retombe sur « 0 » si le tampon n'était qu'un moins)
        if touche == Touche::Operateur('-') && self.tampon.ends_with('-') {
            if self.tampon == "-" {
                self.tampon = "0".to_string();
            } else {
                self.tampon.pop();
                self.tampon.push('+');
            }
            return;
        }

        // 5) garde opérateurs consécutifs : seul « - » passe, et seulement
        //    après +, × ou ÷
        if let Touche::Operateur(op) = touche {
            let dernier = match fin {
                Fin::Operateur(c) => Some(c),
                Fin::MoinsSeul => Some('-'),
                _ => None,
            };
            if let Some(d) = dernier {
                if !(op == '-' && matches!(d, '+' | '×' | '÷')) {
                    return;
                }
            }
        }

        // 6) reprise post-calcul : le tampon repart du résultat affiché
        //    (déjà consommé pour un chiffre ou un point : reprise à vide ;
        //    encore présent pour un opérateur : enchaînement)
        if self.juste_calcule
            && matches!(
                touche,
                Touche::Chiffre(_) | Touche::Point | Touche::Operateur(_)
            )
        {
            self.tampon = std::mem::take(&mut self.affiche_resultat);
            self.juste_calcule = false;

            if touche == Touche::Point {
                self.tampon.push('0');
            }
        }

        // 7) zéro décimal : jamais « +.5 », toujours « +0.5 »
        if touche == Touche::Point && !self.tampon.ends_with(|c: char| c.is_ascii_digit()) {
            self.tampon.push('0');
        }

        // 8) + 9) ajout/remplacement, taille des zéros avant opérateur
        let candidat = match touche {
            Touche::Carre => {
                let mut t = self.tampon.clone();
                t.push('²');
                t
            }
            Touche::Operateur(op) => {
                let mut t = tailler_fraction_finale(&self.tampon);
                t.push(op);
                t
            }
            Touche::Chiffre(c) => {
                if self.tampon == "0" {
                    // le zéro de départ s'efface devant le premier chiffre
                    c.to_string()
                } else {
                    let mut t = self.tampon.clone();
                    t.push(c);
                    t
                }
            }
            Touche::Point => {
                let mut t = self.tampon.clone();
                t.push('.');
                t
            }
            Touche::Commande(_) => unreachable!("commande dans le pipeline d'insertion"),
        };

        // 10) commit
        self.tampon = candidat;
        if !matches!(touche, Touche::Operateur(_)) {
            self.juste_calcule = false;
        }
    }

    /// AC : tampon à « 0 », résultat affiché effacé. Le dernier résultat
    /// numérique est conservé : Ans y accède encore.
    fn effacer(&mut self) {
        self.tampon = "0".to_string();
        self.affiche_resultat.clear();
        self.juste_calcule = false;
    }

    /// ⌫ : retire le dernier caractère (« ² », « × », « ÷ » comptent
    /// pour un), retombe sur « 0 » en dessous de deux caractères.
    fn retour(&mut self) {
        if self.tampon.chars().count() <= 1 {
            self.tampon = "0".to_string();
        } else {
            self.tampon.pop();
        }
        self.juste_calcule = false;
    }

    /// = : évalue le tampon, classe l'issue, archive l'expression telle
    /// que saisie — y compris en échec, pour le rappel.
    fn egal(&mut self) {
        let expression = self.tampon.clone();

        match evaluer_expression(&expression) {
            Ok(v) => {
                self.dernier_resultat = v;
                self.affiche_resultat = format_resultat(v);
                self.juste_calcule = true;
            }
            Err(e) => {
                debug!(%e, expression = %expression, "échec d'évaluation");
                self.affiche_resultat = e.to_string();
                self.juste_calcule = false;
                self.dernier_resultat = 0.0;
            }
        }

        self.historique.pousser(&expression);
    }

    /// Ans : injecte le dernier résultat (forme Display du f64, jamais
    /// d'exposant). Refusé tel quel après « ² ».
    fn reponse(&mut self) {
        if self.tampon.ends_with('²') {
            return;
        }

        let reponse = self.dernier_resultat.to_string();
        if self.juste_calcule {
            self.tampon = reponse;
            self.juste_calcule = false;
        } else if self.tampon == "0" {
            self.tampon = reponse;
        } else {
            self.tampon.push_str(&reponse);
        }
    }

    /// Étiquette la queue du tampon : un seul examen de suffixe par
    /// transition.
    fn fin(&self) -> Fin {
        if self.tampon == "0" {
            return Fin::Zero;
        }
        if self.tampon == "-" {
            return Fin::MoinsSeul;
        }

        let mut it = self.tampon.chars().rev();
        let dernier = it.next();
        let avant = it.next();

        match dernier {
            Some('²') => Fin::Carre,
            Some('.') => Fin::Point,
            Some('-') if avant.is_some_and(est_operateur) => Fin::MoinsApresOperateur,
            Some(c) if est_operateur(c) => Fin::Operateur(c),
            _ => Fin::Chiffre,
        }
    }
}

/// Avant d'ajouter un opérateur : si le dernier terme est une fraction
/// décimale à zéros finaux, retire ces zéros (et un point final nu).
/// « 2.50 » -> « 2.5 » ; « 1.5+20 » reste intact (terme final sans point).
fn tailler_fraction_finale(tampon: &str) -> String {
    let debut_terme = match tampon
        .char_indices()
        .rev()
        .find(|&(_, c)| est_operateur(c))
    {
        Some((i, c)) => i + c.len_utf8(),
        None => 0,
    };
    let terme = &tampon[debut_terme..];

    if !terme.contains('.') || !terme.ends_with('0') {
        return tampon.to_string();
    }

    let mut garde = terme.trim_end_matches('0');
    if garde.ends_with('.') && garde.len() > 1 {
        garde = &garde[..garde.len() - 1];
    }
    format!("{}{}", &tampon[..debut_terme], garde)
}

/// Invariants d'un tampon commis : jamais vide, jamais deux opérateurs
/// consécutifs (hors bascule « <op>- » tolérée), au plus un « ² » par
/// terme et toujours en position finale.
///
/// Note : rien n'interdit un second point décimal dans un terme — la
/// machine le tolère, l'évaluation le classera en erreur.
pub fn est_valide(tampon: &str) -> bool {
    if tampon.is_empty() {
        return false;
    }
    if tampon == "0" || tampon == "-" {
        return true;
    }

    let chars: Vec<char> = tampon.chars().collect();
    for paire in chars.windows(2) {
        if est_operateur(paire[0]) && est_operateur(paire[1]) && paire[1] != '-' {
            return false;
        }
    }

    tampon.split(['+', '-', '×', '÷']).all(|terme| {
        terme.chars().filter(|&c| c == '²').count() <= 1
            && terme
                .find('²')
                .map_or(true, |i| i == terme.len() - '²'.len_utf8())
    })
}
