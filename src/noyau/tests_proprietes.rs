//! Tests propriétés : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le tampon et le pipeline sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - budget temps global
//! - invariants clés, quel que soit l'ordre des touches :
//!   * le tampon reste dans l'alphabet autorisé
//!   * jamais deux caractères opérateurs adjacents
//!   * au plus un point par segment
//!   * une évaluation ratée laisse le tampon intact

use std::time::{Duration, Instant};

use super::erreur::ErreurEval;
use super::saisie::{est_operateur, Saisie};

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Touches simulées ------------------------ */

// Alphabet d'entrée : touches légitimes + intrus (doivent être ignorés).
const TOUCHES: &[char] = &[
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', '.', '+', '-', '*', '/', '×', '÷', 'a', '%',
    ' ', '(', '=',
];

fn touche_aleatoire(rng: &mut Rng) -> char {
    TOUCHES[rng.pick(TOUCHES.len() as u32) as usize]
}

/* ------------------------ Invariants du tampon ------------------------ */

fn alphabet_autorise(c: char) -> bool {
    c.is_ascii_digit() || c == '.' || est_operateur(c)
}

fn check_invariants(expr: &str) {
    // 1) alphabet : rien d'autre que chiffres, point, opérateurs
    for c in expr.chars() {
        assert!(alphabet_autorise(c), "caractère interdit {c:?} dans {expr:?}");
    }

    // 2) jamais deux opérateurs adjacents
    let chars: Vec<char> = expr.chars().collect();
    for paire in chars.windows(2) {
        assert!(
            !(est_operateur(paire[0]) && est_operateur(paire[1])),
            "opérateurs adjacents dans {expr:?}"
        );
    }

    // 3) au plus un point par segment
    for segment in expr.split(est_operateur) {
        let points = segment.chars().filter(|c| *c == '.').count();
        assert!(points <= 1, "segment {segment:?} a {points} points dans {expr:?}");
    }
}

/* ------------------------ Scénarios ------------------------ */

#[test]
fn fuzz_touches_invariants() {
    let start = Instant::now();
    let max = Duration::from_secs(10);

    let mut rng = Rng::new(0xCAFE);

    for _scenario in 0..500 {
        budget(start, max);

        let mut saisie = Saisie::new();
        let longueur = 1 + rng.pick(40);

        for _ in 0..longueur {
            saisie.ajouter(touche_aleatoire(&mut rng));
            check_invariants(saisie.expression());
        }
    }
}

#[test]
fn fuzz_evaluation_sans_panique() {
    let start = Instant::now();
    let max = Duration::from_secs(10);

    let mut rng = Rng::new(0xBEEF);

    for _scenario in 0..500 {
        budget(start, max);

        let mut saisie = Saisie::new();
        for _ in 0..(1 + rng.pick(30)) {
            saisie.ajouter(touche_aleatoire(&mut rng));
        }

        let avant = saisie.expression().to_string();
        match saisie.evaluer() {
            Ok(resultat) => {
                // succès : le tampon porte le résultat, réévaluable tel quel
                assert_eq!(saisie.expression(), resultat);

                let mut rejeu = Saisie::new();
                for c in resultat.chars() {
                    rejeu.ajouter(c);
                }
                assert_eq!(
                    rejeu.evaluer().as_deref(),
                    Ok(resultat.as_str()),
                    "rechainage non idempotent pour {avant:?}"
                );
            }
            Err(
                ErreurEval::CaracteresInvalides
                | ErreurEval::Syntaxe
                | ErreurEval::DivisionParZero
                | ErreurEval::ExpressionInvalide,
            ) => {
                // échec classifié : tampon intact
                assert_eq!(saisie.expression(), avant, "tampon modifié par un échec");
            }
        }
    }
}

#[test]
fn fuzz_retour_arriere_et_effacement() {
    let start = Instant::now();
    let max = Duration::from_secs(10);

    let mut rng = Rng::new(0xF00D);

    for _scenario in 0..300 {
        budget(start, max);

        let mut saisie = Saisie::new();
        for _ in 0..(1 + rng.pick(50)) {
            match rng.pick(10) {
                0 => saisie.retour_arriere(),
                1 => saisie.effacer(),
                _ => saisie.ajouter(touche_aleatoire(&mut rng)),
            }
            check_invariants(saisie.expression());
        }

        // vidage complet par retours arrière : jamais de sous-dépassement
        for _ in 0..60 {
            saisie.retour_arriere();
        }
        assert_eq!(saisie.expression(), "");
    }
}
