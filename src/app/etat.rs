//! src/app/etat.rs
//!
//! État UI (sans vue, sans noyau).
//!
//! Rôle : contenir l’état de la calculatrice (entrée, résultat, erreur, démarche,
//! historique, case `ans`) et offrir des opérations simples (C/CLR/AC) sans
//! logique d’affichage.
//!
//! Contrats :
//! - Aucune évaluation ici (pas de parsing).
//! - La case `ans` n’est écrite que par `set_resultat` (succès uniquement).
//! - Historique borné.

use std::collections::VecDeque;

use crate::noyau::DernierResultat;

/// Garde-fou : nombre max d’entrées conservées dans l’historique.
pub const HISTORIQUE_MAX: usize = 100;

#[derive(Clone, Default, Debug)]
pub struct Demarche {
    pub jetons: String,
    pub rpn: String,
}

/// Commandes tapées dans le champ d’entrée (tout le reste est une expression).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Commande {
    Aide,
    Effacer,
    Quitter,
}

impl Commande {
    pub fn depuis(ligne: &str) -> Option<Self> {
        match ligne.trim() {
            "help" => Some(Commande::Aide),
            "clear" => Some(Commande::Effacer),
            "quit" | "exit" => Some(Commande::Quitter),
            _ => None,
        }
    }
}

/// Lignes saisies, la plus récente en dernier. Pas de doublon consécutif.
#[derive(Clone, Debug, Default)]
pub struct Historique {
    lignes: VecDeque<String>,
}

impl Historique {
    pub fn ajouter(&mut self, ligne: &str) {
        let ligne = ligne.trim();
        if ligne.is_empty() || self.lignes.back().is_some_and(|d| d == ligne) {
            return;
        }
        self.lignes.push_back(ligne.to_string());
        if self.lignes.len() > HISTORIQUE_MAX {
            self.lignes.pop_front();
        }
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &str> {
        self.lignes.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.lignes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lignes.is_empty()
    }
}

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- entrée utilisateur ---
    pub entree: String,

    // --- sorties ---
    pub resultat: String, // valeur formatée (format_nombre)
    pub erreur: String,   // message d’erreur du noyau, verbatim

    // --- démarche (panneau d’explication) ---
    pub demarche: Demarche,

    // --- mémoire ---
    pub ans: DernierResultat,
    pub historique: Historique,

    // --- UX ---
    pub aide_visible: bool,
    // Permet à vue.rs de redonner le focus à l’entrée après un clic sur un bouton.
    pub focus_entree: bool,
    // Demande de fermeture (commande quit/exit), traitée par app.rs.
    pub quitter: bool,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self {
            entree: String::new(),
            resultat: String::new(),
            erreur: String::new(),
            demarche: Demarche::default(),
            ans: DernierResultat::new(),
            historique: Historique::default(),
            aide_visible: false,
            focus_entree: true, // au lancement, on veut pouvoir taper tout de suite
            quitter: false,
        }
    }
}

impl AppCalc {
    /* ------------------------ Actions “boutons” (état seulement) ------------------------ */

    /// AC : remise à zéro totale (entrée + résultats + ans + historique).
    pub fn reset_total(&mut self) {
        self.entree.clear();
        self.clear_resultats();
        self.ans = DernierResultat::new();
        self.historique = Historique::default();
        self.focus_entree = true;
    }

    /// C : effacer seulement l’entrée (sans toucher aux résultats).
    pub fn clear_entree(&mut self) {
        self.entree.clear();
        self.focus_entree = true;
    }

    /// CLR : effacer résultat + erreur + démarche (sans toucher à l’entrée ni à `ans`).
    pub fn clear_resultats(&mut self) {
        self.resultat.clear();
        self.erreur.clear();
        self.demarche = Demarche::default();
        self.focus_entree = true;
    }

    /// Utilitaire : placer une erreur.
    ///
    /// On CONSERVE `resultat` (dernier résultat) pour ne pas “effacer l’écran” sur une faute.
    pub fn set_erreur(&mut self, msg: impl Into<String>) {
        self.erreur = msg.into();
        self.demarche = Demarche::default();
        self.focus_entree = true;
    }

    /// Utilitaire : déposer un résultat réussi (met aussi `ans` à jour).
    pub fn set_resultat(&mut self, valeur: f64, affichage: impl Into<String>, demarche: Demarche) {
        self.erreur.clear();
        self.resultat = affichage.into();
        self.demarche = demarche;
        self.ans.set_last_result(valeur);
        self.focus_entree = true;
    }
}
