//! Martelage déterministe du pavé : robustesse + invariants.
//!
//! But : marteler la machine à états sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - nombre de touches borné
//! - invariants après chaque touche : tampon jamais vide, jamais
//!   d'opérateurs consécutifs illégaux, « ² » toujours en fin de terme
//! - aucune panique, « = » et navigation inclus

use super::saisie::{est_valide, Session};

/* ------------------------ RNG déterministe minimal ------------------------ */

struct Rng {
    state: u64,
}

impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }

    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
}

/* ------------------------ Martelage ------------------------ */

const TOUCHES: [&str; 22] = [
    "0", "1", "2", "3", "4", "5", "6", "7", "8", "9", "+", "-", "×", "÷", ".", "n²", "AC", "⌫",
    "=", "Ans", "^", "v",
];

#[test]
fn martelage_invariants_du_tampon() {
    let mut rng = Rng::new(0xCA1C);
    let mut session = Session::default();

    for pas in 0..5_000u32 {
        let touche = TOUCHES[rng.pick(TOUCHES.len() as u32) as usize];
        let affichage = session.soumettre(touche);

        assert!(
            !affichage.expression.is_empty(),
            "tampon vide au pas {pas} ({touche:?})"
        );
        assert!(
            est_valide(&affichage.expression),
            "tampon invalide au pas {pas} ({touche:?}): {:?}",
            affichage.expression
        );
    }
}

#[test]
fn martelage_sans_commandes() {
    // chiffres/opérateurs/point/carré seulement : mêmes invariants
    let mut rng = Rng::new(7);
    let mut session = Session::default();

    for _ in 0..2_000u32 {
        let touche = TOUCHES[rng.pick(16) as usize];
        let affichage = session.soumettre(touche);
        assert!(est_valide(&affichage.expression));
    }
}

#[test]
fn martelage_puis_egal_ne_panique_pas() {
    let mut rng = Rng::new(42);

    for graine in 0..50u32 {
        let mut session = Session::default();
        for _ in 0..rng.pick(40) {
            let touche = TOUCHES[rng.pick(16) as usize];
            session.soumettre(touche);
        }
        // l'évaluation classe toujours, quel que soit l'état atteint
        let affichage = session.soumettre("=");
        assert!(!affichage.expression.is_empty(), "graine {graine}");
    }
}

#[test]
fn symbole_inconnu_sans_effet() {
    let mut session = Session::default();
    session.soumettre("7");
    let avant = session.soumettre("8");
    let apres = session.soumettre("qwerty");
    assert_eq!(avant, apres);
}
