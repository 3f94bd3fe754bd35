// src/noyau/jetons.rs

use std::f64::consts::{E, PI};
use std::fmt;

use super::erreur::ErreurCalcul;
use super::memoire::DernierResultat;

/// Opérateurs. `Neg` n’est jamais produit par `tokenize` : c’est le moins
/// unaire, décidé au moment du shunting-yard.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Op {
    Plus,
    Minus,
    Star,
    Slash,
    Caret, // ^
    Neg,
}

impl Op {
    pub fn precedence(self) -> u8 {
        match self {
            Op::Neg => 5,
            Op::Caret => 4,
            Op::Star | Op::Slash => 3,
            Op::Plus | Op::Minus => 2,
        }
    }

    pub fn is_right_associative(self) -> bool {
        matches!(self, Op::Caret | Op::Neg)
    }

    pub fn symbole(self) -> &'static str {
        match self {
            Op::Plus => "+",
            Op::Minus => "-",
            Op::Star => "*",
            Op::Slash => "/",
            Op::Caret => "^",
            Op::Neg => "neg",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Tok {
    Num(f64),
    Op(Op),
    LPar,
    RPar,
}

impl fmt::Display for Tok {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tok::Num(v) => write!(f, "{v}"),
            Tok::Op(op) => f.write_str(op.symbole()),
            Tok::LPar => f.write_str("("),
            Tok::RPar => f.write_str(")"),
        }
    }
}

/// Blancs reconnus (équivalent isspace "C" : le \x0B est inclus).
fn est_blanc(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0C' | '\x0B')
}

/// Lit le plus long préfixe décimal valide de `run` (chiffres et points).
/// "1.2.3" -> 1.2 ; "1..2" -> 1 ; "." et ".." sont refusés.
/// Toute la suite est consommée, même la partie ignorée.
fn lire_nombre(run: &str) -> Result<f64, ErreurCalcul> {
    // un nombre décimal contient au plus un point : on coupe au second
    let fin = run.match_indices('.').nth(1).map_or(run.len(), |(i, _)| i);
    run[..fin]
        .parse::<f64>()
        .map_err(|_| ErreurCalcul::NombreInvalide(run.to_string()))
}

/// Tokenize une chaîne en jetons.
/// Supporte:
/// - nombres décimaux (ex: 12, 3.5, .5, 2.)
/// - opérateurs + - * / ^
/// - parenthèses ( )
/// - constantes `pi`, `e` et la case `ans` (lue dans `ans`)
///
/// En cas d’erreur, les jetons déjà lus sont abandonnés.
pub fn tokenize(s: &str, ans: &DernierResultat) -> Result<Vec<Tok>, ErreurCalcul> {
    let mut out = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if est_blanc(c) {
            i += 1;
            continue;
        }

        // Nombre : plus longue suite de chiffres et de points
        if c.is_ascii_digit() || c == '.' {
            let start = i;
            while i < chars.len() && (chars[i].is_ascii_digit() || chars[i] == '.') {
                i += 1;
            }
            let run: String = chars[start..i].iter().collect();
            let v = lire_nombre(&run)?;
            out.push(Tok::Num(v));
            continue;
        }

        // Opérateurs (unaire/binaire décidé plus tard)
        let op = match c {
            '+' => Some(Op::Plus),
            '-' => Some(Op::Minus),
            '*' => Some(Op::Star),
            '/' => Some(Op::Slash),
            '^' => Some(Op::Caret),
            _ => None,
        };
        if let Some(op) = op {
            out.push(Tok::Op(op));
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

        // Identifiants : [a-zA-Z]+
        if c.is_ascii_alphabetic() {
            let start = i;
            while i < chars.len() && chars[i].is_ascii_alphabetic() {
                i += 1;
            }
            let name: String = chars[start..i].iter().collect();
            let v = match name.as_str() {
                "pi" => PI,
                "e" => E,
                "ans" => ans.valeur(),
                _ => return Err(ErreurCalcul::IdentInconnu(name)),
            };
            out.push(Tok::Num(v));
            continue;
        }

        return Err(ErreurCalcul::CaractereInattendu(c));
    }

    Ok(out)
}

/// Format utilitaire (démarche) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Tok]) -> String {
    tokens
        .iter()
        .map(Tok::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn toks(s: &str) -> Vec<Tok> {
        tokenize(s, &DernierResultat::new()).unwrap_or_else(|e| panic!("tokenize({s:?}): {e}"))
    }

    #[test]
    fn nombres_operateurs_parentheses() {
        assert_eq!(
            toks("2*(3.5 - .5)"),
            vec![
                Tok::Num(2.0),
                Tok::Op(Op::Star),
                Tok::LPar,
                Tok::Num(3.5),
                Tok::Op(Op::Minus),
                Tok::Num(0.5),
                Tok::RPar,
            ]
        );
    }

    #[test]
    fn blancs_ignores() {
        assert_eq!(
            toks(" \t1\n+\r2\x0B^\x0C3 "),
            vec![
                Tok::Num(1.0),
                Tok::Op(Op::Plus),
                Tok::Num(2.0),
                Tok::Op(Op::Caret),
                Tok::Num(3.0),
            ]
        );
    }

    #[test]
    fn vide() {
        assert!(toks("").is_empty());
        assert!(toks("   ").is_empty());
    }

    #[test]
    fn constantes_exactes() {
        assert_eq!(toks("pi"), vec![Tok::Num(3.141592653589793)]);
        assert_eq!(toks("e"), vec![Tok::Num(2.718281828459045)]);
    }

    #[test]
    fn ans_lu_dans_la_case() {
        let mut ans = DernierResultat::new();
        assert_eq!(tokenize("ans", &ans), Ok(vec![Tok::Num(0.0)]));
        ans.set_last_result(42.0);
        assert_eq!(tokenize("ans", &ans), Ok(vec![Tok::Num(42.0)]));
    }

    #[test]
    fn nombre_invalide() {
        let ans = DernierResultat::new();
        assert_eq!(
            tokenize("1 + .", &ans),
            Err(ErreurCalcul::NombreInvalide(".".into()))
        );
        assert_eq!(
            tokenize("..", &ans),
            Err(ErreurCalcul::NombreInvalide("..".into()))
        );
    }

    #[test]
    fn plus_long_prefixe_valide() {
        // la suite entière est consommée, seul le préfixe valide compte
        assert_eq!(
            toks("1.2.3+1"),
            vec![Tok::Num(1.2), Tok::Op(Op::Plus), Tok::Num(1.0)]
        );
        assert_eq!(toks("1..2"), vec![Tok::Num(1.0)]);
        assert_eq!(toks("5.."), vec![Tok::Num(5.0)]);
        assert_eq!(toks(".5.5"), vec![Tok::Num(0.5)]);
    }

    #[test]
    fn identifiant_inconnu() {
        let ans = DernierResultat::new();
        // la suite alphabétique est lue en entier : "pix" n’est pas "pi" + "x"
        assert_eq!(
            tokenize("2*pix", &ans),
            Err(ErreurCalcul::IdentInconnu("pix".into()))
        );
        assert_eq!(
            tokenize("PI", &ans),
            Err(ErreurCalcul::IdentInconnu("PI".into()))
        );
    }

    #[test]
    fn caractere_inattendu() {
        let ans = DernierResultat::new();
        assert_eq!(
            tokenize("3 % 2", &ans),
            Err(ErreurCalcul::CaractereInattendu('%'))
        );
        assert_eq!(
            tokenize("π", &ans),
            Err(ErreurCalcul::CaractereInattendu('π'))
        );
    }

    #[test]
    fn format_lisible() {
        assert_eq!(format_tokens(&toks("(1.5+2)^3")), "( 1.5 + 2 ) ^ 3");
    }
}
