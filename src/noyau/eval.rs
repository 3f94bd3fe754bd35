//! Noyau — évaluation (pipeline réel)
//!
//! tokenize -> to_postfix -> reduce
//!
//! Chaque étape court-circuite à la première erreur : jamais de valeur partielle
//! à côté d’une erreur.

use super::erreur::ErreurCalcul;
use super::jetons::{format_tokens, tokenize};
use super::memoire::DernierResultat;
use super::rpn::{reduce, to_postfix};

/// Trace textuelle des étapes (affichée dans le panneau « Démarche »).
#[derive(Default, Clone, Debug, PartialEq)]
pub struct DemarcheNoyau {
    pub jetons: String,
    pub rpn: String,
}

/// API publique : évalue une expression.
///
/// `ans` est seulement lu ; c’est à l’hôte d’appeler `set_last_result` ensuite.
pub fn evaluate(expr_str: &str, ans: &DernierResultat) -> Result<f64, ErreurCalcul> {
    evaluate_detaille(expr_str, ans).map(|(v, _d)| v)
}

/// Comme `evaluate`, mais retourne aussi la démarche (jetons + RPN).
pub fn evaluate_detaille(
    expr_str: &str,
    ans: &DernierResultat,
) -> Result<(f64, DemarcheNoyau), ErreurCalcul> {
    // 1) Jetons
    let jetons = tokenize(expr_str, ans).inspect_err(|e| {
        tracing::debug!(expr = expr_str, erreur = %e, "échec tokenize");
    })?;

    // 2) RPN
    let rpn = to_postfix(&jetons).inspect_err(|e| {
        tracing::debug!(expr = expr_str, erreur = %e, "échec shunting-yard");
    })?;

    // 3) Valeur
    let v = reduce(&rpn).inspect_err(|e| {
        tracing::debug!(expr = expr_str, erreur = %e, "échec réduction");
    })?;

    tracing::debug!(expr = expr_str, valeur = v, "évaluation ok");

    let d = DemarcheNoyau {
        jetons: format_tokens(&jetons),
        rpn: format_tokens(&rpn),
    };
    Ok((v, d))
}
