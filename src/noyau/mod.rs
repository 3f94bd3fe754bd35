//! Noyau de calcul (f64)
//!
//! Organisation interne :
//! - jetons.rs   : tokenisation (Tok, Op)
//! - rpn.rs      : shunting-yard + réduction de la RPN
//! - eval.rs     : pipeline complet
//! - memoire.rs  : case `ans` (possédée par l’hôte)
//! - erreur.rs   : ErreurCalcul
//! - format.rs   : affichage d’un résultat (milliers, précision)

pub mod erreur;
pub mod eval;
pub mod format;
pub mod jetons;
pub mod memoire;
pub mod rpn;

#[cfg(test)]
mod tests_proprietes;

// API publique minimale
pub use erreur::ErreurCalcul;
pub use eval::{evaluate, evaluate_detaille};
pub use format::format_nombre;
pub use memoire::DernierResultat;
