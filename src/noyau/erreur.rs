//! Noyau — erreurs du pipeline.
//!
//! Une variante par type d’échec. Le message (`Display`) est affiché tel quel à
//! l’utilisateur : il ne faut pas le reformuler côté UI.

use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Error)]
pub enum ErreurCalcul {
    /* ------------------------ Lexicales ------------------------ */
    /// Suite de chiffres/points dont aucun préfixe n’est un nombre ("." , "..", …).
    #[error("Invalid number: {0}")]
    NombreInvalide(String),

    #[error("Unknown identifier: {0}")]
    IdentInconnu(String),

    #[error("Unexpected character: {0}")]
    CaractereInattendu(char),

    /* ------------------------ Structurelles ------------------------ */
    #[error("Mismatched parentheses")]
    Parentheses,

    /* ------------------------ Opérandes / arithmétique ------------------------ */
    #[error("Insufficient operands for unary -")]
    OperandeUnaire,

    #[error("Insufficient operands")]
    Operandes,

    #[error("Division by zero")]
    DivisionParZero,

    /// Pile finale vide ou avec plusieurs valeurs.
    #[error("Malformed expression")]
    ExpressionMalformee,
}
