//! Parcours de touches complets : chaque test rejoue une séquence réelle
//! sur une Session neuve et vérifie le tampon (et la réponse) rendus.

use super::saisie::{est_valide, Session};

fn tampon_apres(touches: &[&str]) -> String {
    let mut session = Session::default();
    let mut affichage = session.affichage();
    for t in touches {
        affichage = session.soumettre(t);
    }
    affichage.expression
}

fn reponse_apres(touches: &[&str]) -> String {
    let mut session = Session::default();
    let mut affichage = session.affichage();
    for t in touches {
        affichage = session.soumettre(t);
    }
    affichage.resultat
}

/* ------------------------ Saisie de base ------------------------ */

#[test]
fn chiffres_sans_zero_de_tete() {
    assert_eq!(tampon_apres(&["7", "8"]), "78");
    assert_eq!(tampon_apres(&["5", "AC", "7", "8"]), "78");
}

#[test]
fn zero_de_depart_conserve_devant_operateur() {
    assert_eq!(tampon_apres(&["+"]), "0+");
    assert_eq!(tampon_apres(&["0", "0"]), "0");
}

#[test]
fn point_sur_zero() {
    assert_eq!(tampon_apres(&["."]), "0.");
    assert_eq!(tampon_apres(&[".", "5"]), "0.5");
}

#[test]
fn point_apres_operateur_ajoute_un_zero() {
    assert_eq!(tampon_apres(&["5", "+", "."]), "5+0.");
    assert_eq!(tampon_apres(&["5", "+", ".", "5"]), "5+0.5");
}

#[test]
fn symbole_inconnu_ignore() {
    assert_eq!(tampon_apres(&["7", "azerty", "8"]), "78");
}

/* ------------------------ Moins et bascules de signe ------------------------ */

#[test]
fn moins_de_tete() {
    assert_eq!(tampon_apres(&["-"]), "-");
    assert_eq!(tampon_apres(&["-", "5"]), "-5");
}

#[test]
fn double_moins_de_tete_retombe_sur_zero() {
    assert_eq!(tampon_apres(&["-", "-"]), "0");
}

#[test]
fn double_moins_devient_plus() {
    assert_eq!(tampon_apres(&["5", "-"]), "5-");
    assert_eq!(tampon_apres(&["5", "-", "-"]), "5+");
}

#[test]
fn bascule_apres_operateur() {
    assert_eq!(tampon_apres(&["5", "+", "-"]), "5+-");
    // une seule bascule en attente : tout opérateur de plus est refusé
    assert_eq!(tampon_apres(&["5", "+", "-", "-"]), "5+-");
    assert_eq!(tampon_apres(&["5", "+", "-", "×"]), "5+-");
    assert_eq!(tampon_apres(&["5", "+", "-", "2"]), "5+-2");
}

#[test]
fn operateurs_consecutifs_refuses() {
    assert_eq!(tampon_apres(&["5", "+", "+"]), "5+");
    assert_eq!(tampon_apres(&["5", "-", "×"]), "5-");
    assert_eq!(tampon_apres(&["5", "×", "÷"]), "5×");
}

/* ------------------------ Carré ------------------------ */

#[test]
fn verrou_carre() {
    assert_eq!(tampon_apres(&["3", "n²"]), "3²");
    // chiffre, point, carré, Ans : refusés après « ² »
    assert_eq!(tampon_apres(&["3", "n²", "5"]), "3²");
    assert_eq!(tampon_apres(&["3", "n²", "."]), "3²");
    assert_eq!(tampon_apres(&["3", "n²", "n²"]), "3²");
    assert_eq!(tampon_apres(&["3", "n²", "Ans"]), "3²");
    // seul un opérateur prolonge
    assert_eq!(tampon_apres(&["3", "n²", "+"]), "3²+");
}

/* ------------------------ Taille des zéros ------------------------ */

#[test]
fn zeros_finaux_tailles_avant_operateur() {
    assert_eq!(tampon_apres(&["2", ".", "5", "0", "+"]), "2.5+");
    assert_eq!(tampon_apres(&["2", ".", "0", "0", "+"]), "2+");
}

#[test]
fn taille_limitee_au_terme_final() {
    // « 20 » n'a pas de point : rien à tailler
    assert_eq!(
        tampon_apres(&["1", ".", "5", "+", "2", "0", "+"]),
        "1.5+20+"
    );
}

/* ------------------------ Retour et effacement ------------------------ */

#[test]
fn retour_caractere_par_caractere() {
    assert_eq!(tampon_apres(&["7", "8", "⌫"]), "7");
    assert_eq!(tampon_apres(&["7", "⌫"]), "0");
    assert_eq!(tampon_apres(&["7", "⌫", "⌫"]), "0");
    // « ² » et « × » comptent pour un caractère
    assert_eq!(tampon_apres(&["3", "n²", "⌫"]), "3");
    assert_eq!(tampon_apres(&["3", "×", "⌫"]), "3");
}

/* ------------------------ Égal et reprise post-calcul ------------------------ */

#[test]
fn egal_carre_plus_quatre() {
    assert_eq!(reponse_apres(&["3", "n²", "+", "4", "="]), "13");
}

#[test]
fn egal_laisse_le_tampon() {
    assert_eq!(tampon_apres(&["3", "+", "4", "="]), "3+4");
}

#[test]
fn reprise_par_operateur_enchaine() {
    assert_eq!(tampon_apres(&["5", "+", "3", "=", "×"]), "8×");
    assert_eq!(reponse_apres(&["5", "+", "3", "=", "×", "2", "="]), "16");
}

#[test]
fn reprise_par_chiffre_repart_a_neuf() {
    assert_eq!(tampon_apres(&["5", "+", "3", "=", "7"]), "7");
}

#[test]
fn reprise_par_point_repart_de_zero() {
    assert_eq!(tampon_apres(&["5", "+", "3", "=", "."]), "0.");
}

#[test]
fn division_fractionnaire_bout_en_bout() {
    assert_eq!(reponse_apres(&["7", "÷", "2", "="]), "3.5");
}

#[test]
fn signe_apres_fois_bout_en_bout() {
    assert_eq!(reponse_apres(&["5", "×", "-", "2", "="]), "-10");
}

/* ------------------------ Issues d'erreur ------------------------ */

#[test]
fn division_par_zero_message_et_remise() {
    let mut session = Session::default();
    for t in ["5", "÷", "0", "="] {
        session.soumettre(t);
    }
    assert_eq!(session.affichage().resultat, "Cannot divide by zero");
    assert_eq!(session.dernier_resultat(), 0.0);
    // l'expression tentée reste rappelable
    assert_eq!(session.historique(), ["5÷0"]);
}

#[test]
fn reste_malforme_en_erreur_generique() {
    assert_eq!(reponse_apres(&["5", "+", "="]), "Error");
}

#[test]
fn debordement_de_carre_en_erreur_math() {
    // 160 chiffres : le carré dépasse le plus grand f64 fini
    let mut session = Session::default();
    for _ in 0..160 {
        session.soumettre("9");
    }
    session.soumettre("n²");
    let apres = session.soumettre("=");

    assert_eq!(apres.resultat, "Math Error");
    assert_eq!(session.dernier_resultat(), 0.0);
}

/* ------------------------ Ans ------------------------ */

#[test]
fn ans_sans_calcul_prealable() {
    assert_eq!(tampon_apres(&["Ans"]), "0");
}

#[test]
fn ans_conserve_apres_effacement() {
    assert_eq!(tampon_apres(&["7", "=", "AC", "Ans"]), "7");
}

#[test]
fn ans_ajoute_en_fin_d_expression() {
    assert_eq!(tampon_apres(&["7", "=", "AC", "5", "+", "Ans"]), "5+7");
}

#[test]
fn ans_remplace_apres_calcul() {
    assert_eq!(tampon_apres(&["5", "+", "3", "=", "Ans"]), "8");
}

/* ------------------------ Historique ------------------------ */

#[test]
fn rappel_monte_et_descend() {
    let mut session = Session::default();
    for t in ["1", "+", "1", "=", "2", "+", "2", "="] {
        session.soumettre(t);
    }

    // après « = », le curseur vise la plus récente : monter rappelle l'autre
    assert_eq!(session.soumettre("^").expression, "1+1");
    assert_eq!(session.soumettre("^").expression, "1+1"); // bord haut
    assert_eq!(session.soumettre("v").expression, "2+2");
    assert_eq!(session.soumettre("v").expression, "2+2"); // bord bas
}

#[test]
fn rappel_repart_de_la_fin_apres_saisie() {
    let mut session = Session::default();
    for t in ["1", "+", "1", "=", "2", "+", "2", "="] {
        session.soumettre(t);
    }
    session.soumettre("AC");
    // saisie hors navigation : la montée repart de la plus récente
    assert_eq!(session.soumettre("^").expression, "2+2");
}

#[test]
fn plafond_de_cinq_entrees() {
    let mut session = Session::default();
    for n in ["1", "2", "3", "4", "5", "6"] {
        for t in [n, "+", n, "="] {
            session.soumettre(t);
        }
    }
    assert_eq!(
        session.historique(),
        ["2+2", "3+3", "4+4", "5+5", "6+6"]
    );
}

#[test]
fn rappel_puis_reevaluation() {
    let mut session = Session::default();
    for t in ["6", "×", "7", "=", "AC"] {
        session.soumettre(t);
    }
    assert_eq!(session.soumettre("^").expression, "6×7");
    assert_eq!(session.soumettre("=").resultat, "42");
}

/* ------------------------ Invariants transverses ------------------------ */

#[test]
fn tampon_jamais_vide_et_valide() {
    let sequences: &[&[&str]] = &[
        &["AC", "AC"],
        &["⌫", "⌫", "⌫"],
        &["-", "-", "-"],
        &["5", "+", "-", "2", "=", "+"],
        &["3", "n²", "+", "4", "=", "7", "n²", "="],
    ];
    for touches in sequences {
        let tampon = tampon_apres(touches);
        assert!(!tampon.is_empty());
        assert!(est_valide(&tampon), "tampon invalide: {tampon:?}");
    }
}
