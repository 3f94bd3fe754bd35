//! Tests de propriétés : campagne aléatoire déterministe.
//!
//! - RNG déterministe (seed fixe)
//! - longueur bornée
//! - budget temps global
//! - invariant clé : sans parenthèses, `+ - * /` donne le même résultat qu’une
//!   évaluation de référence (termes gauche→droite, `*`/`/` avant `+`/`-`)

use std::time::{Duration, Instant};

use super::erreur::ErreurCalcul;
use super::eval::evaluate;
use super::memoire::DernierResultat;

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

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Référence sans parenthèses ------------------------ */

/// Évalue `n0 op1 n1 op2 n2 …` : d’abord les produits/quotients (gauche→droite),
/// puis les sommes/différences (gauche→droite).
fn reference(nombres: &[f64], ops: &[char]) -> f64 {
    let mut termes: Vec<f64> = vec![nombres[0]];
    let mut signes: Vec<char> = Vec::new();

    for (op, &n) in ops.iter().zip(&nombres[1..]) {
        match op {
            '*' => *termes.last_mut().unwrap() *= n,
            '/' => *termes.last_mut().unwrap() /= n,
            _ => {
                signes.push(*op);
                termes.push(n);
            }
        }
    }

    let mut acc = termes[0];
    for (s, t) in signes.iter().zip(&termes[1..]) {
        if *s == '+' {
            acc += t;
        } else {
            acc -= t;
        }
    }
    acc
}

#[test]
fn prop_precedence_sans_parentheses() {
    let start = Instant::now();
    let max = Duration::from_secs(5);
    let mut rng = Rng::new(0xC0FFEE);
    let ans = DernierResultat::new();

    for _ in 0..2_000 {
        budget(start, max);

        let longueur = 1 + rng.pick(8) as usize;
        // chiffres 1..=9 : jamais de division par zéro
        let nombres: Vec<f64> = (0..longueur).map(|_| (1 + rng.pick(9)) as f64).collect();
        let ops: Vec<char> = (1..longueur)
            .map(|_| ['+', '-', '*', '/'][rng.pick(4) as usize])
            .collect();

        let mut texte = format!("{}", nombres[0]);
        for (op, n) in ops.iter().zip(&nombres[1..]) {
            texte.push_str(&format!(" {op} {n}"));
        }

        let attendu = reference(&nombres, &ops);
        let obtenu = evaluate(&texte, &ans).unwrap_or_else(|e| panic!("{texte:?}: {e}"));
        assert!(
            (obtenu - attendu).abs() <= 1e-9 * attendu.abs().max(1.0),
            "{texte:?}: obtenu={obtenu} attendu={attendu}"
        );
    }
}

/* ------------------------ Robustesse (entrées quelconques) ------------------------ */

// identifiants et ".5" suivis d’un blanc : pas de "pie" ni de "eans"
const ALPHABET: &[&str] = &[
    "1", "2", "0", ".5 ", "pi ", "e ", "ans ", "+", "-", "*", "/", "^", "(", ")", " ",
];

fn gen_bruit(rng: &mut Rng) -> String {
    let n = rng.pick(12);
    (0..n)
        .map(|_| ALPHABET[rng.pick(ALPHABET.len() as u32) as usize])
        .collect()
}

fn is_erreur_attendue(e: &ErreurCalcul) -> bool {
    // alphabet sans caractère inconnu ni identifiant inconnu
    matches!(
        e,
        ErreurCalcul::Parentheses
            | ErreurCalcul::Operandes
            | ErreurCalcul::OperandeUnaire
            | ErreurCalcul::DivisionParZero
            | ErreurCalcul::ExpressionMalformee
    )
}

#[test]
fn prop_bruit_deterministe_sans_panique() {
    let start = Instant::now();
    let max = Duration::from_secs(5);
    let mut rng = Rng::new(42);
    let mut ans = DernierResultat::new();
    ans.set_last_result(3.0);

    for _ in 0..5_000 {
        budget(start, max);

        let s = gen_bruit(&mut rng);
        let r1 = evaluate(&s, &ans);
        let r2 = evaluate(&s, &ans);

        match (r1, r2) {
            (Ok(a), Ok(b)) => assert!(a.to_bits() == b.to_bits(), "{s:?}: {a} != {b}"),
            (Err(a), Err(b)) => {
                assert_eq!(a, b, "{s:?}");
                assert!(is_erreur_attendue(&a), "{s:?}: erreur inattendue {a}");
            }
            (r1, r2) => panic!("{s:?}: résultats divergents {r1:?} / {r2:?}"),
        }
    }
}

#[test]
fn prop_parentheses_neutres() {
    // (x) == x pour toute expression valide
    let start = Instant::now();
    let max = Duration::from_secs(5);
    let mut rng = Rng::new(7);
    let ans = DernierResultat::new();

    for _ in 0..2_000 {
        budget(start, max);

        let s = gen_bruit(&mut rng);
        if let Ok(v) = evaluate(&s, &ans) {
            let w = evaluate(&format!("({s})"), &ans)
                .unwrap_or_else(|e| panic!("({s}) échoue: {e}"));
            assert!(v.to_bits() == w.to_bits() || (v.is_nan() && w.is_nan()), "{s:?}");
        }
    }
}
