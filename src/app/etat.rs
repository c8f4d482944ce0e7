//! src/app/etat.rs
//!
//! État UI (sans vue, sans egui).
//!
//! Rôle : posséder la Saisie du noyau, traduire les touches en opérations
//! du tampon, et porter la politique d'affichage d'erreur (message +
//! remise à zéro différée). Le noyau reste purement synchrone : le délai
//! vit ICI, côté présentation, jamais dans evaluer().
//!
//! Contrats :
//! - Aucune logique d'affichage (pas d'egui dans ce fichier).
//! - Actions déterministes : l'horloge est un paramètre (testable avec
//!   des instants synthétiques).

use crate::noyau::Saisie;

/// Durée d'affichage d'une erreur avant remise à zéro (secondes).
pub const DUREE_ERREUR: f64 = 1.5;

/// Vocabulaire de touches, côté présentation.
/// La vue et le clavier se traduisent tous deux vers ces valeurs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Touche {
    /// Chiffre, point décimal ou opérateur — transmis tel quel au tampon
    /// (qui ignore ce qu'il ne reconnaît pas).
    Caractere(char),
    /// C / Échap : efface le tampon (et toute erreur en cours).
    Effacer,
    /// DEL / Backspace : retire le dernier caractère.
    RetourArriere,
    /// = / Entrée : évalue.
    Egal,
}

#[derive(Clone, Debug, Default)]
pub struct AppCalc {
    // --- noyau ---
    pub saisie: Saisie,

    // --- erreur affichée (vide = pas d'erreur) ---
    pub erreur: String,

    // --- horloge UI au moment où l'erreur est apparue ---
    pub erreur_depuis: Option<f64>,
}

impl AppCalc {
    /// Applique une touche. `maintenant` : horloge UI en secondes
    /// (egui: `ctx.input(|i| i.time)`), utilisée pour dater une erreur.
    pub fn touche(&mut self, touche: Touche, maintenant: f64) {
        match touche {
            Touche::Caractere(c) => self.saisie.ajouter(c),

            Touche::Effacer => {
                self.saisie.effacer();
                self.efface_erreur();
            }

            Touche::RetourArriere => self.saisie.retour_arriere(),

            Touche::Egal => match self.saisie.evaluer() {
                Ok(_) => self.efface_erreur(),
                Err(e) => {
                    self.erreur = e.to_string();
                    self.erreur_depuis = Some(maintenant);
                }
            },
        }
    }

    /// À appeler à chaque frame : efface l'erreur (ET le tampon, comme
    /// un "C") une fois DUREE_ERREUR écoulée.
    pub fn tic(&mut self, maintenant: f64) {
        if let Some(depuis) = self.erreur_depuis {
            if maintenant - depuis >= DUREE_ERREUR {
                self.efface_erreur();
                self.saisie.effacer();
            }
        }
    }

    /// Vrai si une erreur est affichée (compte à rebours en cours).
    pub fn erreur_en_cours(&self) -> bool {
        self.erreur_depuis.is_some()
    }

    fn efface_erreur(&mut self) {
        self.erreur.clear();
        self.erreur_depuis = None;
    }
}
