// src/noyau/rpn.rs
//
// Shunting-yard -> RPN -> valeur
// Objectif:
// - Convertir une suite de Tok en RPN (postfix)
// - Puis réduire la RPN en f64 sur une pile
//
// Règles:
// - Moins unaire:
//    - si '-' arrive quand on n'attend PAS une valeur (début d'expression,
//      après un opérateur, après '('), il devient Tok::MoinsUnaire,
//      précédence 3, associatif à droite : "2*-3" => "2 3 ~ *"
// - Toute malformation (opérande manquant, parenthèse orpheline,
//   pile non réduite à une valeur) => ErreurEval::Syntaxe

use super::erreur::ErreurEval;
use super::jetons::Tok;

fn precedence(t: &Tok) -> i32 {
    match t {
        Tok::Plus | Tok::Minus => 1,
        Tok::Star | Tok::Slash => 2,
        Tok::MoinsUnaire => 3,
        _ => 0,
    }
}

fn is_right_associative(t: &Tok) -> bool {
    matches!(t, Tok::MoinsUnaire)
}

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   tokens: [Num(2), Plus, Num(3), Star, Num(4)]
///   rpn:    [Num(2), Num(3), Num(4), Star, Plus]
pub fn to_rpn(tokens: &[Tok]) -> Result<Vec<Tok>, ErreurEval> {
    let mut out: Vec<Tok> = Vec::new();
    let mut ops: Vec<Tok> = Vec::new();

    // “valeur” = un nombre ou une expression fermée.
    // Sert à distinguer le moins binaire du moins unaire.
    let mut prev_was_value = false;

    for tok in tokens.iter().copied() {
        match tok {
            Tok::Num(_) => {
                out.push(tok);
                prev_was_value = true;
            }

            Tok::LPar => {
                ops.push(tok);
                prev_was_value = false;
            }

            Tok::RPar => {
                // dépile jusqu'à '(' ; si absente => parenthèse orpheline
                let mut ouverte = false;
                while let Some(top) = ops.pop() {
                    if matches!(top, Tok::LPar) {
                        ouverte = true;
                        break;
                    }
                    out.push(top);
                }
                if !ouverte {
                    return Err(ErreurEval::Syntaxe);
                }
                prev_was_value = true;
            }

            Tok::Minus if !prev_was_value => {
                // moins unaire : précédence max, rien à dépiler avant lui
                ops.push(Tok::MoinsUnaire);
                prev_was_value = false;
            }

            Tok::Plus | Tok::Minus | Tok::Star | Tok::Slash => {
                // dépile tant que:
                // - on n'est pas bloqué par '('
                // - et la précédence/associativité exige de sortir
                //   l'opérateur du haut
                while let Some(top) = ops.last() {
                    if matches!(top, Tok::LPar) {
                        break;
                    }

                    let p_top = precedence(top);
                    let p_tok = precedence(&tok);

                    let doit_pop = if is_right_associative(&tok) {
                        p_top > p_tok
                    } else {
                        p_top >= p_tok
                    };

                    if doit_pop {
                        out.push(ops.pop().ok_or(ErreurEval::Syntaxe)?);
                    } else {
                        break;
                    }
                }

                ops.push(tok);
                prev_was_value = false;
            }

            // tokenize ne produit jamais MoinsUnaire
            Tok::MoinsUnaire => return Err(ErreurEval::Syntaxe),
        }
    }

    // vide la pile ops
    while let Some(op) = ops.pop() {
        if matches!(op, Tok::LPar) {
            return Err(ErreurEval::Syntaxe);
        }
        out.push(op);
    }

    Ok(out)
}

/// Réduit une RPN en valeur f64.
///
/// Pas de détection d'infini/NaN ici : c'est le pipeline (eval.rs) qui
/// classifie le résultat. Ici on ne signale que les malformations.
pub fn eval_rpn(rpn: &[Tok]) -> Result<f64, ErreurEval> {
    let mut pile: Vec<f64> = Vec::new();

    for tok in rpn.iter().copied() {
        match tok {
            Tok::Num(v) => pile.push(v),

            Tok::MoinsUnaire => {
                let x = pile.pop().ok_or(ErreurEval::Syntaxe)?;
                pile.push(-x);
            }

            Tok::Plus | Tok::Minus | Tok::Star | Tok::Slash => {
                let b = pile.pop().ok_or(ErreurEval::Syntaxe)?;
                let a = pile.pop().ok_or(ErreurEval::Syntaxe)?;

                let v = match tok {
                    Tok::Plus => a + b,
                    Tok::Minus => a - b,
                    Tok::Star => a * b,
                    Tok::Slash => a / b,
                    _ => return Err(ErreurEval::Syntaxe),
                };

                pile.push(v);
            }

            Tok::LPar | Tok::RPar => return Err(ErreurEval::Syntaxe),
        }
    }

    // exactement une valeur : sinon "()" (pile vide) ou "2 3" (surplus)
    if pile.len() != 1 {
        return Err(ErreurEval::Syntaxe);
    }
    pile.pop().ok_or(ErreurEval::Syntaxe)
}

#[cfg(test)]
mod tests {
    use super::{eval_rpn, to_rpn, ErreurEval};
    use crate::noyau::jetons::tokenize;

    fn calc(s: &str) -> Result<f64, ErreurEval> {
        eval_rpn(&to_rpn(&tokenize(s)?)?)
    }

    #[test]
    fn precedence_standard() {
        assert_eq!(calc("2+3*4").unwrap(), 14.0);
        assert_eq!(calc("2*3+4").unwrap(), 10.0);
    }

    #[test]
    fn associativite_gauche() {
        // 8/4/2 = 1, pas 4
        assert_eq!(calc("8/4/2").unwrap(), 1.0);
        assert_eq!(calc("10-4-3").unwrap(), 3.0);
    }

    #[test]
    fn moins_unaire_debut() {
        assert_eq!(calc("-5+2").unwrap(), -3.0);
    }

    #[test]
    fn moins_unaire_apres_operateur() {
        assert_eq!(calc("2*-3").unwrap(), -6.0);
        assert_eq!(calc("5--5").unwrap(), 10.0);
    }

    #[test]
    fn parentheses_groupent() {
        assert_eq!(calc("(1+2)*3").unwrap(), 9.0);
        assert_eq!(calc("-(1+2)").unwrap(), -3.0);
    }

    #[test]
    fn malformations() {
        assert_eq!(calc("5+"), Err(ErreurEval::Syntaxe));
        assert_eq!(calc("-"), Err(ErreurEval::Syntaxe));
        assert_eq!(calc("+5"), Err(ErreurEval::Syntaxe));
        assert_eq!(calc("()"), Err(ErreurEval::Syntaxe));
        assert_eq!(calc("(1+2"), Err(ErreurEval::Syntaxe));
        assert_eq!(calc("1+2)"), Err(ErreurEval::Syntaxe));
    }
}
