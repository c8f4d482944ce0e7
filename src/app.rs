// src/app.rs
//
// Calculatrice classique — module App (racine)
// --------------------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs)
// - Ré-exporter AppCalc (pour main.rs: use crate::app::AppCalc;)
// - Fournir l'impl eframe::App (compatible NATIF + WEB)
//
// C'est ICI que le clavier physique est traduit vers le vocabulaire
// Touche (même vocabulaire que les boutons de la vue) :
// - Entrée / '='  => Egal
// - Échap         => Effacer (comme le bouton "C")
// - Backspace     => RetourArriere
// - ','           => '.' (certains claviers utilisent la virgule décimale)
// - texte tapé    => Caractere (le tampon ignore ce qu'il ne connaît pas)

pub mod etat;
pub mod vue;

// Ré-export pratique : `use crate::app::AppCalc;`
pub use etat::AppCalc;

use eframe::egui;

use etat::Touche;

/// Traduit un événement egui en touche calculatrice (None = sans objet).
fn touches_depuis_evenement(ev: &egui::Event, sortie: &mut Vec<Touche>) {
    match ev {
        egui::Event::Text(texte) => {
            for c in texte.chars() {
                let t = match c {
                    '=' => Touche::Egal,
                    ',' => Touche::Caractere('.'),
                    autre => Touche::Caractere(autre),
                };
                sortie.push(t);
            }
        }

        egui::Event::Key {
            key: egui::Key::Enter,
            pressed: true,
            ..
        } => sortie.push(Touche::Egal),

        egui::Event::Key {
            key: egui::Key::Backspace,
            pressed: true,
            ..
        } => sortie.push(Touche::RetourArriere),

        egui::Event::Key {
            key: egui::Key::Escape,
            pressed: true,
            ..
        } => sortie.push(Touche::Effacer),

        _ => {}
    }
}

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let maintenant = ctx.input(|i| i.time);

        // Clavier -> touches (les événements sont copiés pour ne pas
        // garder le verrou input pendant la mutation de l'état)
        let evenements = ctx.input(|i| i.events.clone());
        let mut touches: Vec<Touche> = Vec::new();
        for ev in &evenements {
            touches_depuis_evenement(ev, &mut touches);
        }
        for t in touches {
            self.touche(t, maintenant);
        }

        // Compte à rebours d'erreur (politique de présentation, pas du noyau)
        self.tic(maintenant);
        if self.erreur_en_cours() {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui); // méthode publique (dans vue.rs)
        });
    }
}

#[cfg(test)]
mod tests {
    use super::{touches_depuis_evenement, Touche};
    use eframe::egui;

    fn map_texte(s: &str) -> Vec<Touche> {
        let mut out = Vec::new();
        touches_depuis_evenement(&egui::Event::Text(s.to_string()), &mut out);
        out
    }

    #[test]
    fn texte_vers_touches() {
        assert_eq!(map_texte("7"), vec![Touche::Caractere('7')]);
        assert_eq!(map_texte("="), vec![Touche::Egal]);
        // virgule décimale de certains claviers
        assert_eq!(map_texte(","), vec![Touche::Caractere('.')]);
    }

    #[test]
    fn touches_speciales() {
        let mut out = Vec::new();
        touches_depuis_evenement(
            &egui::Event::Key {
                key: egui::Key::Enter,
                physical_key: None,
                pressed: true,
                repeat: false,
                modifiers: egui::Modifiers::default(),
            },
            &mut out,
        );
        assert_eq!(out, vec![Touche::Egal]);
    }
}
