// src/noyau/format.rs
//
// Affichage “joli” d’un f64 :
// - entiers sans décimales
// - précision adaptée (2..=10) sinon
// - très petits nombres en notation scientifique
// - séparateur de milliers ','

/// En dessous (en valeur absolue, hors 0) : notation scientifique.
const SEUIL_SCIENTIFIQUE: f64 = 1e-4;

const PRECISION_MIN: i32 = 2;
const PRECISION_MAX: i32 = 10;

pub fn format_nombre(v: f64) -> String {
    if v.is_nan() {
        return "NaN".to_string();
    }
    if v.is_infinite() {
        return if v > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let abs = v.abs();
    if abs > 0.0 && abs < SEUIL_SCIENTIFIQUE {
        // pas de séparateurs : on casserait mantisse/exposant
        return format_scientifique(v);
    }

    let brut = if v.fract() == 0.0 {
        format!("{v:.0}")
    } else {
        format!("{v:.*}", precision_pour(v))
    };

    avec_milliers(&brut)
}

/// Nombre de décimales : assez pour voir l’écart à l’entier le plus proche.
fn precision_pour(v: f64) -> usize {
    let diff = (v - v.round()).abs();
    let p = if diff > 0.0 {
        (-diff.log10()) as i32 + 1
    } else {
        PRECISION_MIN
    };
    p.clamp(PRECISION_MIN, PRECISION_MAX) as usize
}

/// 1.234560e-05 : 6 décimales, exposant signé sur au moins deux chiffres.
fn format_scientifique(v: f64) -> String {
    let s = format!("{v:.6e}");
    match s.split_once('e') {
        Some((mantisse, exp)) => {
            let (signe, chiffres) = match exp.strip_prefix('-') {
                Some(c) => ('-', c),
                None => ('+', exp),
            };
            format!("{mantisse}e{signe}{chiffres:0>2}")
        }
        None => s,
    }
}

/// Insère ',' tous les trois chiffres dans la partie entière.
fn avec_milliers(brut: &str) -> String {
    let (signe, reste) = match brut.strip_prefix('-') {
        Some(r) => ("-", r),
        None => ("", brut),
    };
    let (entier, frac) = match reste.find('.') {
        Some(i) => reste.split_at(i),
        None => (reste, ""),
    };

    let n = entier.len();
    let mut out = String::with_capacity(brut.len() + n / 3);
    out.push_str(signe);
    for (i, c) in entier.chars().enumerate() {
        out.push(c);
        let restants = n - i - 1;
        if restants > 0 && restants % 3 == 0 {
            out.push(',');
        }
    }
    out.push_str(frac);
    out
}
