// src/noyau/format.rs
//
// Arrondi + rendu décimal canonique du résultat.
//
// Contrat:
// - arrondi à 10 décimales pour gommer le bruit binaire du f64
//   (0.1+0.2 doit se lire "0.3", pas "0.30000000000000004")
// - rendu via le Display natif de f64 : entiers sans ".0", pas de
//   notation scientifique, représentation la plus courte qui round-trip
// - "-0" se lit "0"

/// Arrondit à 10 décimales.
///
/// Passe par le formateur décimal (arrondi correct quelle que soit la
/// magnitude, sans débordement multiplicatif) puis reparse. Idempotent :
/// arrondir(arrondir(v)) == arrondir(v), ce qui garantit le rechainage
/// "=" puis "=" sans dérive.
pub fn arrondir(v: f64) -> f64 {
    if !v.is_finite() {
        return v;
    }
    format!("{v:.10}").parse().unwrap_or(v)
}

/// Rendu décimal canonique d'une valeur finie.
pub fn en_chaine(v: f64) -> String {
    // -0.0 == 0.0 : on normalise l'affichage
    if v == 0.0 {
        return "0".to_string();
    }
    format!("{v}")
}
