//! src/noyau/saisie.rs
//!
//! Tampon d'expression : accumulation caractère par caractère.
//!
//! Rôle : posséder l'expression courante et garantir, à CHAQUE insertion,
//! qu'elle reste partiellement valide :
//! - au plus un point décimal par segment (portion depuis le dernier opérateur)
//! - jamais deux opérateurs consécutifs (le nouveau remplace l'ancien)
//! - un opérateur en tête seulement si c'est le moins unaire
//!
//! Contrats :
//! - `ajouter` est totale : un caractère non reconnu est ignoré, jamais
//!   d'erreur pendant l'accumulation.
//! - `evaluer` réussie remplace le tampon par le résultat (calcul chaîné) ;
//!   ratée, elle laisse le tampon intact.
//! - Pas de singleton : une instance par session, possédée par l'appelant.

use super::erreur::ErreurEval;
use super::eval::eval_expression;

/// Les six caractères opérateurs, alias Unicode compris.
///
/// Le même test de membership sert à la coalescence ET au découpage en
/// segments : × et ÷ se comportent exactement comme * et /.
pub fn est_operateur(c: char) -> bool {
    matches!(c, '+' | '-' | '*' | '/' | '×' | '÷')
}

#[derive(Clone, Debug, Default)]
pub struct Saisie {
    expression: String,
}

impl Saisie {
    pub fn new() -> Self {
        Self::default()
    }

    /// Instantané lecture seule pour l'affichage.
    pub fn expression(&self) -> &str {
        &self.expression
    }

    /// Ajoute un caractère brut (bouton ou clavier).
    /// Dispatch : chiffre / point décimal / opérateur ; le reste est ignoré.
    pub fn ajouter(&mut self, c: char) {
        if c.is_ascii_digit() {
            self.expression.push(c);
            return;
        }

        if c == '.' {
            self.ajouter_point();
            return;
        }

        if est_operateur(c) {
            self.ajouter_operateur(c);
        }

        // tout autre caractère : ignoré
    }

    /// Point décimal — un seul par segment.
    ///
    /// Le segment courant est la portion depuis le dernier opérateur
    /// (ou toute l'expression s'il n'y en a pas).
    fn ajouter_point(&mut self) {
        let segment = self.expression.rsplit(est_operateur).next().unwrap_or("");

        if segment.contains('.') {
            // déjà un point dans ce nombre : refus silencieux
            return;
        }

        if segment.is_empty() {
            // expression vide ou juste après un opérateur : "0." plutôt que "."
            self.expression.push_str("0.");
        } else {
            self.expression.push('.');
        }
    }

    /// Opérateur — jamais deux de suite.
    ///
    /// Tampon vide : seul '-' est accepté (amorce du moins unaire).
    /// Dernier caractère opérateur : il est REMPLACÉ par le nouveau
    /// (coalescence, correction sans retour arrière).
    fn ajouter_operateur(&mut self, op: char) {
        if self.expression.is_empty() {
            if op == '-' {
                self.expression.push('-');
            }
            return;
        }

        if self.expression.chars().last().is_some_and(est_operateur) {
            self.expression.pop();
        }
        self.expression.push(op);
    }

    /// Remise à zéro du tampon.
    pub fn effacer(&mut self) {
        self.expression.clear();
    }

    /// Retire le dernier caractère ; sans effet sur un tampon vide.
    pub fn retour_arriere(&mut self) {
        self.expression.pop();
    }

    /// Évalue le tampon courant.
    ///
    /// Succès : le tampon devient le résultat (on peut enchaîner "=" puis
    /// continuer à taper des opérateurs). Échec : tampon inchangé.
    pub fn evaluer(&mut self) -> Result<String, ErreurEval> {
        let resultat = eval_expression(&self.expression)?;
        self.expression.clone_from(&resultat);
        Ok(resultat)
    }
}
