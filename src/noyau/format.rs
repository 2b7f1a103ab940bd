// src/noyau/format.rs

use tracing::debug;

/// Fenêtre de tolérance « zéro » / « quasi-entier ».
const TOLERANCE: f64 = 1e-9;

/// Chiffres significatifs conservés pour un résultat fractionnaire.
const CHIFFRES_SIGNIFICATIFS: i32 = 15;

/// Affichage canonique d'un résultat.
///
/// - |v| < 1e-9        => "0" (écrase -0 et le bruit flottant)
/// - quasi-entier      => entier, sans point décimal
/// - sinon             => 15 chiffres significatifs, rendu Display
///   (plus court aller-retour), sans re-taille de zéros
pub fn format_resultat(v: f64) -> String {
    debug!(valeur = v, "format_resultat");

    if v.abs() < TOLERANCE {
        return "0".to_string();
    }

    if (v - v.round()).abs() < TOLERANCE {
        return format!("{:.0}", v.round());
    }

    arrondi_significatif(v).to_string()
}

/// Arrondit au nombre de chiffres significatifs retenu ; le Display de f64
/// rend ensuite la forme décimale la plus courte qui fait l'aller-retour.
fn arrondi_significatif(v: f64) -> f64 {
    let ordre = v.abs().log10().floor() as i32;
    let facteur = 10f64.powi(CHIFFRES_SIGNIFICATIFS - 1 - ordre);

    // hors gamme : on rend la valeur telle quelle
    if !facteur.is_finite() || facteur == 0.0 {
        return v;
    }

    (v * facteur).round() / facteur
}

#[cfg(test)]
mod tests {
    use super::format_resultat;

    #[test]
    fn entier_sans_point() {
        assert_eq!(format_resultat(4.0), "4");
        assert_eq!(format_resultat(13.0), "13");
        assert_eq!(format_resultat(-5.0), "-5");
    }

    #[test]
    fn zero_signe_et_bruit() {
        assert_eq!(format_resultat(-0.0), "0");
        assert_eq!(format_resultat(-0.0000000001), "0");
        assert_eq!(format_resultat(0.0000000001), "0");
    }

    #[test]
    fn quasi_entier_recolle() {
        assert_eq!(format_resultat(4.9999999999), "5");
        assert_eq!(format_resultat(-2.0000000001), "-2");
    }

    #[test]
    fn fractionnaire_quinze_chiffres() {
        assert_eq!(format_resultat(2.5), "2.5");
        assert_eq!(format_resultat(0.1 + 0.2), "0.3");
        assert_eq!(format_resultat(1.0 / 3.0), "0.333333333333333");
    }

    #[test]
    fn grand_entier_sans_exposant() {
        let s = format_resultat(1e20);
        assert!(!s.contains('e') && !s.contains('E'));
        assert_eq!(s, "100000000000000000000");
    }
}
