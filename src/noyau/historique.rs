// src/noyau/historique.rs
//
// Rappel borné des expressions acceptées.
//
// Le curseur vit dans [0, entrees.len()] : la position len() est le repos
// (« à la fin »), d'où la prochaine montée rappelle l'entrée la plus récente.

use tracing::debug;

/// Capacité maximale ; au-delà, la plus ancienne entrée est évincée.
const CAPACITE: usize = 5;

#[derive(Clone, Debug, Default)]
pub struct Historique {
    entrees: Vec<String>,
    curseur: usize,
}

impl Historique {
    /// Enregistre une expression ; les doublons consécutifs sont absorbés.
    /// Après l'appel, le curseur vise l'entrée la plus récente.
    pub fn pousser(&mut self, expr: &str) {
        if self.entrees.last().is_some_and(|dernier| dernier == expr) {
            return;
        }

        self.entrees.push(expr.to_string());
        self.curseur = self.entrees.len() - 1;

        if self.entrees.len() > CAPACITE {
            self.entrees.remove(0);
            self.curseur -= 1;
        }

        debug!(entrees = ?self.entrees, "historique");
    }

    /// Recule le curseur et rend l'entrée visée ; None au bord (curseur intact).
    pub fn monter(&mut self) -> Option<&str> {
        if self.curseur == 0 {
            return None;
        }
        self.curseur -= 1;
        Some(self.entrees[self.curseur].as_str())
    }

    /// Avance le curseur et rend l'entrée visée ; None au bord (curseur intact).
    pub fn descendre(&mut self) -> Option<&str> {
        if self.curseur + 1 >= self.entrees.len() {
            return None;
        }
        self.curseur += 1;
        Some(self.entrees[self.curseur].as_str())
    }

    /// Toute saisie hors navigation repart de l'entrée la plus récente.
    pub fn remettre_a_la_fin(&mut self) {
        self.curseur = self.entrees.len();
    }

    pub fn entrees(&self) -> &[String] {
        &self.entrees
    }
}

#[cfg(test)]
mod tests {
    use super::Historique;

    #[test]
    fn plafond_et_eviction() {
        let mut h = Historique::default();
        for n in 1..=6 {
            h.pousser(&format!("{n}+{n}"));
        }
        assert_eq!(h.entrees(), ["2+2", "3+3", "4+4", "5+5", "6+6"]);
    }

    #[test]
    fn doublons_consecutifs_absorbes() {
        let mut h = Historique::default();
        h.pousser("1+1");
        h.pousser("1+1");
        h.pousser("2+2");
        h.pousser("1+1");
        assert_eq!(h.entrees(), ["1+1", "2+2", "1+1"]);
    }

    #[test]
    fn navigation_et_bords() {
        let mut h = Historique::default();
        h.pousser("1+1");
        h.pousser("2+2");

        // pousser laisse le curseur sur la plus récente : monter vise l'avant-dernière
        assert_eq!(h.monter(), Some("1+1"));
        assert_eq!(h.monter(), None);
        assert_eq!(h.descendre(), Some("2+2"));
        assert_eq!(h.descendre(), None);

        // depuis le repos, monter rappelle la plus récente
        h.remettre_a_la_fin();
        assert_eq!(h.monter(), Some("2+2"));
    }

    #[test]
    fn vide_sans_effet() {
        let mut h = Historique::default();
        assert_eq!(h.monter(), None);
        assert_eq!(h.descendre(), None);
        h.remettre_a_la_fin();
        assert!(h.entrees().is_empty());
    }

    #[test]
    fn eviction_suit_le_curseur() {
        let mut h = Historique::default();
        for n in 1..=6 {
            h.pousser(&format!("{n}"));
        }
        // le curseur vise toujours la plus récente après éviction
        assert_eq!(h.monter(), Some("5"));
    }
}
