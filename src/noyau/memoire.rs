// src/noyau/memoire.rs
//
// Case `ans` : dernier résultat retenu par l’hôte.
// Le pipeline la LIT (tokenize) mais ne l’écrit jamais.

/// Dernier résultat (identifiant `ans`). Vaut 0 tant que l’hôte n’a rien déposé.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DernierResultat {
    valeur: f64,
}

impl DernierResultat {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn valeur(&self) -> f64 {
        self.valeur
    }

    /// À appeler par l’hôte après chaque évaluation réussie.
    pub fn set_last_result(&mut self, valeur: f64) {
        tracing::debug!(valeur, "ans mis à jour");
        self.valeur = valeur;
    }
}
