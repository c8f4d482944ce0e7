//! Noyau calculatrice classique
//!
//! Organisation interne :
//! - saisie.rs  : tampon d'expression (règles d'insertion + évaluation)
//! - jetons.rs  : tokenisation
//! - rpn.rs     : shunting-yard + réduction f64
//! - format.rs  : arrondi 10 décimales + chaîne canonique
//! - eval.rs    : pipeline complet
//! - erreur.rs  : taxonomie des erreurs d'évaluation

pub mod erreur;
pub mod eval;
pub mod format;
pub mod jetons;
pub mod rpn;
pub mod saisie;

#[cfg(test)]
mod tests_proprietes;

// API publique minimale
pub use erreur::ErreurEval;
pub use eval::eval_expression;
pub use saisie::Saisie;
