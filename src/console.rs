// src/console.rs
//
// Mode terminal “one-shot” : `calc 2*(3+4)`
// - succès : valeur formatée sur stdout, code 0
// - échec  : "Error: <message>" sur stderr, code 2
//
// La case `ans` est neuve (0) : rien n’est retenu entre deux appels.

use std::process::ExitCode;

use nu_ansi_term::Color;

use crate::noyau::{evaluate, format_nombre, DernierResultat, ErreurCalcul};

/// Code de sortie en cas d’expression refusée.
const CODE_ERREUR: u8 = 2;

/// Rejoint les arguments avec un espace (comme s’ils formaient une seule ligne).
pub fn joindre(args: &[String]) -> String {
    args.join(" ")
}

/// Texte à afficher pour un résultat (sans couleur).
pub fn rendu(res: &Result<f64, ErreurCalcul>) -> String {
    match res {
        Ok(v) => format_nombre(*v),
        Err(e) => format!("Error: {e}"),
    }
}

pub fn executer(expression: &str, couleur: bool) -> ExitCode {
    let res = evaluate(expression, &DernierResultat::new());
    let texte = rendu(&res);

    match res {
        Ok(v) => {
            // NaN / infini en rouge, comme une valeur suspecte
            let c = if v.is_finite() { Color::Green } else { Color::Red };
            println!("{}", peindre(&texte, c, couleur));
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::debug!(expr = expression, erreur = %e, "one-shot refusé");
            eprintln!("{}", peindre(&texte, Color::Red, couleur));
            ExitCode::from(CODE_ERREUR)
        }
    }
}

fn peindre(texte: &str, c: Color, couleur: bool) -> String {
    if couleur {
        c.paint(texte).to_string()
    } else {
        texte.to_string()
    }
}
