//! Noyau — évaluation (pipeline complet)
//!
//! normalise (× ÷) -> valide la classe de caractères -> tokenize -> RPN
//!        -> réduction f64 -> classification (infini/NaN) -> arrondi -> chaîne
//!
//! Remarque : la grammaire est fermée (quatre opérateurs binaires, moins
//! unaire, parenthèses, nombres décimaux). Aucune exécution de code hôte,
//! donc aucune injection possible par construction.

use super::erreur::ErreurEval;
use super::format::{arrondir, en_chaine};
use super::jetons::tokenize;
use super::rpn::{eval_rpn, to_rpn};

/// Réécrit les alias Unicode en opérateurs ASCII : × => *, ÷ => /.
fn normaliser(expression: &str) -> String {
    expression.replace('×', "*").replace('÷', "/")
}

/// Classe de caractères autorisée après normalisation : chiffres,
/// opérateurs ASCII, point, parenthèses, espaces. Tout le reste fait
/// échouer l'évaluation AVANT le parse.
fn valider_caracteres(expression: &str) -> Result<(), ErreurEval> {
    let autorise = |c: char| {
        c.is_ascii_digit() || matches!(c, '+' | '-' | '*' | '/' | '.' | '(' | ')') || c.is_whitespace()
    };
    if expression.chars().all(autorise) {
        Ok(())
    } else {
        Err(ErreurEval::CaracteresInvalides)
    }
}

/// API publique : évalue une expression et retourne sa forme décimale
/// canonique.
///
/// - expression vide => "0" (évaluer rien vaut zéro, pas une erreur)
/// - ±infini => DivisionParZero ; NaN => ExpressionInvalide
/// - sinon : arrondi à 10 décimales puis rendu canonique
pub fn eval_expression(expression: &str) -> Result<String, ErreurEval> {
    if expression.is_empty() {
        return Ok("0".to_string());
    }

    // 1) Normalisation des alias Unicode
    let normalisee = normaliser(expression);

    // 2) Garde-fou : classe de caractères stricte
    valider_caracteres(&normalisee)?;

    // 3) Jetons -> RPN -> valeur
    let jetons = tokenize(&normalisee)?;
    let rpn = to_rpn(&jetons)?;
    let valeur = eval_rpn(&rpn)?;

    // 4) Classification du résultat
    if valeur.is_infinite() {
        return Err(ErreurEval::DivisionParZero);
    }
    if valeur.is_nan() {
        return Err(ErreurEval::ExpressionInvalide);
    }

    // 5) Arrondi anti-bruit + chaîne canonique
    Ok(en_chaine(arrondir(valeur)))
}
