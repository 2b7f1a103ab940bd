//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : porter la Session du noyau et les deux chaînes d'affichage
//! (énoncé + réponse), et relayer les symboles de touches sans aucune
//! logique d'arithmétique ici.
//!
//! Contrats :
//! - Aucune règle de grammaire ici (tout vit dans le noyau).
//! - La troncature d'écran est une politique de vue : le noyau rend
//!   toujours le tampon complet.

use crate::noyau::Session;

/// Largeur maximale de l'énoncé affiché (fenêtre de queue).
pub const LARGEUR_ENONCE: usize = 13;

pub struct AppCalc {
    session: Session,

    // --- sorties (recopie du dernier Affichage rendu) ---
    pub enonce: String,  // tampon complet
    pub reponse: String, // résultat ou message d'erreur
}

impl Default for AppCalc {
    fn default() -> Self {
        let session = Session::default();
        let affichage = session.affichage();
        Self {
            session,
            enonce: affichage.expression,
            reponse: affichage.resultat,
        }
    }
}

impl AppCalc {
    /// Relaye un symbole de touche au noyau et recopie l'affichage rendu.
    pub fn toucher(&mut self, symbole: &str) {
        let affichage = self.session.soumettre(symbole);
        self.enonce = affichage.expression;
        self.reponse = affichage.resultat;
    }

    /// Énoncé tronqué à la fenêtre de queue : les derniers caractères
    /// priment, comme sur un écran de calculatrice.
    pub fn enonce_affiche(&self) -> &str {
        let total = self.enonce.chars().count();
        if total <= LARGEUR_ENONCE {
            return &self.enonce;
        }

        let saut = self
            .enonce
            .char_indices()
            .nth(total - LARGEUR_ENONCE)
            .map_or(0, |(i, _)| i);
        &self.enonce[saut..]
    }

    pub fn historique(&self) -> &[String] {
        self.session.historique()
    }
}

#[cfg(test)]
mod tests {
    use super::{AppCalc, LARGEUR_ENONCE};

    #[test]
    fn troncature_fenetre_de_queue() {
        let mut app = AppCalc::default();
        for _ in 0..20 {
            app.toucher("7");
        }
        app.toucher("+");

        // le tampon complet reste accessible, l'écran ne garde que la queue
        assert_eq!(app.enonce.chars().count(), 21);
        assert_eq!(app.enonce_affiche().chars().count(), LARGEUR_ENONCE);
        assert!(app.enonce_affiche().ends_with('+'));
    }

    #[test]
    fn enonce_court_inchange() {
        let mut app = AppCalc::default();
        app.toucher("1");
        app.toucher("+");
        app.toucher("2");
        assert_eq!(app.enonce_affiche(), "1+2");
    }

    #[test]
    fn relais_vers_le_noyau() {
        let mut app = AppCalc::default();
        for t in ["3", "n²", "+", "4", "="] {
            app.toucher(t);
        }
        assert_eq!(app.reponse, "13");
        assert_eq!(app.historique(), ["3²+4"]);
    }
}
