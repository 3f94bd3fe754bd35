// src/noyau/rpn.rs
//
// Shunting-yard -> RPN -> valeur
// Objectif:
// - Convertir une suite de Tok en RPN (postfix)
// - Puis réduire la RPN avec une pile de f64
//
// Règles:
// - Moins unaire:
//    - '-' en tête, ou juste après un opérateur ou '(' => Op::Neg
//    - Neg a la plus forte précédence (5) et est associatif à droite
// - '^' associatif à droite : 2^3^2 = 2^(3^2)

use super::erreur::ErreurCalcul;
use super::jetons::{Op, Tok};

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   tokens: [Num(2), Star, LPar, Num(3), Plus, Num(4), RPar]
///   rpn:    [Num(2), Num(3), Num(4), Plus, Star]
pub fn to_postfix(tokens: &[Tok]) -> Result<Vec<Tok>, ErreurCalcul> {
    let mut out: Vec<Tok> = Vec::with_capacity(tokens.len());
    // Pile : uniquement des Tok::Op et des Tok::LPar
    let mut ops: Vec<Tok> = Vec::new();

    for (i, tok) in tokens.iter().copied().enumerate() {
        match tok {
            Tok::Num(_) => out.push(tok),

            Tok::Op(op) => {
                let op = if op == Op::Minus && attend_une_valeur(tokens, i) {
                    Op::Neg
                } else {
                    op
                };

                // dépile tant que le sommet est un opérateur qui doit sortir avant `op`
                while let Some(&Tok::Op(top)) = ops.last() {
                    let doit_pop = if op.is_right_associative() {
                        top.precedence() > op.precedence()
                    } else {
                        top.precedence() >= op.precedence()
                    };

                    if !doit_pop {
                        break;
                    }
                    out.push(Tok::Op(top));
                    ops.pop();
                }

                ops.push(Tok::Op(op));
            }

            Tok::LPar => ops.push(tok),

            Tok::RPar => {
                // dépile jusqu’à '(' ; pile vide sans '(' => parenthèse orpheline
                let mut trouve = false;
                while let Some(top) = ops.pop() {
                    if top == Tok::LPar {
                        trouve = true;
                        break;
                    }
                    out.push(top);
                }
                if !trouve {
                    return Err(ErreurCalcul::Parentheses);
                }
            }
        }
    }

    // vide la pile ops
    while let Some(top) = ops.pop() {
        match top {
            Tok::LPar | Tok::RPar => return Err(ErreurCalcul::Parentheses),
            Tok::Op(_) | Tok::Num(_) => out.push(top),
        }
    }

    tracing::trace!(rpn = ?out, "postfix");
    Ok(out)
}

/// '-' est unaire s’il ouvre l’expression ou suit un opérateur / une '('.
fn attend_une_valeur(tokens: &[Tok], i: usize) -> bool {
    match i.checked_sub(1).map(|p| tokens[p]) {
        None => true,
        Some(Tok::Op(_) | Tok::LPar) => true,
        Some(Tok::Num(_) | Tok::RPar) => false,
    }
}

/// Réduit une RPN en valeur.
///
/// - binaire : on dépile b PUIS a, et on calcule a <op> b
/// - division par zéro : erreur (jamais ±inf silencieux)
/// - `^` : `powf` tel quel (NaN possible pour base < 0 et exposant fractionnaire)
pub fn reduce(rpn: &[Tok]) -> Result<f64, ErreurCalcul> {
    let mut st: Vec<f64> = Vec::with_capacity(rpn.len());

    for tok in rpn {
        match *tok {
            Tok::Num(v) => st.push(v),

            Tok::Op(op) => {
                let r = match op {
                    Op::Neg => -st.pop().ok_or(ErreurCalcul::OperandeUnaire)?,
                    Op::Plus => {
                        let (a, b) = deux_operandes(&mut st)?;
                        a + b
                    }
                    Op::Minus => {
                        let (a, b) = deux_operandes(&mut st)?;
                        a - b
                    }
                    Op::Star => {
                        let (a, b) = deux_operandes(&mut st)?;
                        a * b
                    }
                    Op::Slash => {
                        let (a, b) = deux_operandes(&mut st)?;
                        if b == 0.0 {
                            return Err(ErreurCalcul::DivisionParZero);
                        }
                        a / b
                    }
                    Op::Caret => {
                        let (a, b) = deux_operandes(&mut st)?;
                        a.powf(b)
                    }
                };
                st.push(r);
            }

            // `to_postfix` ne laisse jamais de parenthèse en sortie
            Tok::LPar | Tok::RPar => return Err(ErreurCalcul::ExpressionMalformee),
        }
    }

    match st.as_slice() {
        [v] => Ok(*v),
        _ => Err(ErreurCalcul::ExpressionMalformee),
    }
}

/// Dépile b PUIS a (b a été empilé en dernier).
fn deux_operandes(st: &mut Vec<f64>) -> Result<(f64, f64), ErreurCalcul> {
    let b = st.pop().ok_or(ErreurCalcul::Operandes)?;
    let a = st.pop().ok_or(ErreurCalcul::Operandes)?;
    Ok((a, b))
}
