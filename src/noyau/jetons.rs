// src/noyau/jetons.rs

use super::erreur::ErreurEval;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Tok {
    Num(f64),

    Plus,
    Minus,
    Star,
    Slash,

    // Moins unaire : jamais produit par tokenize, injecté par to_rpn
    // quand un '-' arrive là où on n'attend pas d'opérateur binaire.
    MoinsUnaire,

    LPar,
    RPar,
}

/// Tokenize une chaîne NORMALISÉE (× et ÷ déjà réécrits en * et /).
/// Supporte:
/// - nombres décimaux (ex: 12, 0.5, 7.)
/// - opérateurs + - * /
/// - parenthèses ( )
/// - espaces (ignorés)
///
/// Un caractère hors classe => CaracteresInvalides (normalement déjà
/// intercepté par la validation en amont). Un nombre mal formé
/// (ex: "1.2.3") => Syntaxe.
pub fn tokenize(s: &str) -> Result<Vec<Tok>, ErreurEval> {
    let mut out = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        // Parenthèses
        if c == '(' {
            out.push(Tok::LPar);
            i += 1;
            continue;
        }
        if c == ')' {
            out.push(Tok::RPar);
            i += 1;
            continue;
        }

        // Opérateurs
        match c {
            '+' => {
                out.push(Tok::Plus);
                i += 1;
                continue;
            }
            '-' => {
                out.push(Tok::Minus);
                i += 1;
                continue;
            }
            '*' => {
                out.push(Tok::Star);
                i += 1;
                continue;
            }
            '/' => {
                out.push(Tok::Slash);
                i += 1;
                continue;
            }
            _ => {}
        }

        // Nombre décimal : une suite de chiffres et de points, validée
        // d'un bloc par le parse f64 ("1.2.3" échoue => Syntaxe).
        if c.is_ascii_digit() || c == '.' {
            let start = i;
            while i < chars.len() && (chars[i].is_ascii_digit() || chars[i] == '.') {
                i += 1;
            }
            let num_str: String = chars[start..i].iter().collect();
            let v: f64 = num_str.parse().map_err(|_| ErreurEval::Syntaxe)?;
            out.push(Tok::Num(v));
            continue;
        }

        return Err(ErreurEval::CaracteresInvalides);
    }

    Ok(out)
}
