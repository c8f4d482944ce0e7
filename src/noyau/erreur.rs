// src/noyau/erreur.rs

use thiserror::Error;

/// Taxonomie des erreurs d'évaluation.
///
/// Toutes sont des conditions attendues et récupérables : une évaluation
/// ratée ne touche jamais au tampon de saisie (l'utilisateur corrige et
/// recommence). Aucune n'est fatale pour le noyau.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ErreurEval {
    /// L'expression normalisée contient un caractère hors de la classe
    /// autorisée (chiffres, + - * / . ( ) et espaces).
    #[error("caractères invalides")]
    CaracteresInvalides,

    /// La classe de caractères passe mais l'expression est mal formée
    /// (opérateur final, parenthèses déséquilibrées, double point, etc.).
    #[error("erreur de syntaxe")]
    Syntaxe,

    /// La valeur calculée est ±infini — seule façon d'y arriver avec
    /// cette grammaire : une division par zéro littérale.
    #[error("division par zéro")]
    DivisionParZero,

    /// La valeur calculée est NaN (ex: 0/0).
    #[error("expression invalide")]
    ExpressionInvalide,
}
