//! Noyau — évaluation (pipeline réel)
//!
//! preparer (carrés -> glyphes -> décimales) -> lexer -> RPN -> pliage f64
//! -> classement de l'issue.
//!
//! Remarque : le classement est exhaustif — rien ne remonte au-delà du
//! noyau autrement que comme ErreurEval.

use thiserror::Error;

use super::canon::preparer;
use super::rpn::{eval_rpn, lexer, to_rpn};

/// Échec d'évaluation. Le Display est le message utilisateur, tel quel.
#[derive(Error, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErreurEval {
    #[error("Cannot divide by zero")]
    DivisionParZero,

    /// NaN ou infini : débordement de carré inclus.
    #[error("Math Error")]
    Math,

    /// Tout reste malformé (opérateur pendant, littéral illisible, vide).
    #[error("Error")]
    Syntaxe,
}

/// API publique : évalue le tampon tel que saisi.
///
/// 1) canonicalisation (carrés, glyphes, décimales)
/// 2) lexer + shunting-yard + pliage f64
/// 3) un résultat non fini est une erreur math
pub fn evaluer_expression(expr: &str) -> Result<f64, ErreurEval> {
    let s = expr.trim();
    if s.is_empty() {
        return Err(ErreurEval::Syntaxe);
    }

    let canonique = preparer(s)?;
    let jetons = lexer(&canonique)?;
    let rpn = to_rpn(&jetons);
    let v = eval_rpn(&rpn)?;

    if !v.is_finite() {
        return Err(ErreurEval::Math);
    }
    Ok(v)
}

#[cfg(test)]
mod tests {
    use super::{evaluer_expression, ErreurEval};

    fn ok(s: &str) -> f64 {
        evaluer_expression(s).unwrap_or_else(|e| panic!("evaluer_expression({s:?}) erreur: {e}"))
    }

    fn erreur(s: &str) -> ErreurEval {
        evaluer_expression(s).expect_err("erreur attendue")
    }

    // --- Arithmétique de base ---

    #[test]
    fn addition_simple() {
        assert_eq!(ok("1+2"), 3.0);
    }

    #[test]
    fn precedence_fois_sur_plus() {
        assert_eq!(ok("1+2×3"), 7.0);
        assert_eq!(ok("2×3+1"), 7.0);
    }

    #[test]
    fn associativite_gauche() {
        assert_eq!(ok("10-2-3"), 5.0);
        assert_eq!(ok("8÷2÷2"), 2.0);
    }

    #[test]
    fn division_fractionnaire() {
        // la coercition décimale garantit 3.5, pas 3
        assert_eq!(ok("7÷2"), 3.5);
    }

    // --- Carrés ---

    #[test]
    fn carre_puis_somme() {
        assert_eq!(ok("3²+4"), 13.0);
    }

    #[test]
    fn carre_decimal() {
        assert_eq!(ok("2.5²"), 6.25);
    }

    // --- Signes ---

    #[test]
    fn litteral_negatif_apres_operateur() {
        assert_eq!(ok("5×-2"), -10.0);
        assert_eq!(ok("5+-2"), 3.0);
        assert_eq!(ok("-5+3"), -2.0);
    }

    #[test]
    fn double_moins_valeur() {
        assert_eq!(ok("5--3"), 8.0);
    }

    // --- Issues d'erreur ---

    #[test]
    fn division_par_zero() {
        assert_eq!(erreur("5÷0"), ErreurEval::DivisionParZero);
        assert_eq!(erreur("1÷0.0"), ErreurEval::DivisionParZero);
    }

    #[test]
    fn carre_deborde() {
        let enorme = format!("{}²+1", "9".repeat(200));
        assert_eq!(erreur(&enorme), ErreurEval::Math);
    }

    #[test]
    fn restes_malformes() {
        assert_eq!(erreur(""), ErreurEval::Syntaxe);
        assert_eq!(erreur("5+"), ErreurEval::Syntaxe);
        assert_eq!(erreur("-"), ErreurEval::Syntaxe);
        assert_eq!(erreur("5.5.5"), ErreurEval::Syntaxe);
    }

    #[test]
    fn messages_utilisateur() {
        assert_eq!(ErreurEval::DivisionParZero.to_string(), "Cannot divide by zero");
        assert_eq!(ErreurEval::Math.to_string(), "Math Error");
        assert_eq!(ErreurEval::Syntaxe.to_string(), "Error");
    }
}
