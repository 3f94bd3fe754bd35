// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Clavier : Enter soumet la ligne (expression ou commande help/clear/quit)
// - Tactile : boutons, focus redonné après clic (focus_entree)
// - Historique cliquable : recharge la ligne dans l’entrée

use eframe::egui;

use super::etat::{AppCalc, Commande, Demarche};
use crate::noyau::{evaluate_detaille, format_nombre};

const AIDE: &[(&str, &str)] = &[
    ("help", "Afficher cette aide"),
    ("clear", "Effacer l’écran (résultat, erreur, démarche)"),
    ("quit / exit", "Quitter la calculatrice"),
    ("+ - * /", "Arithmétique de base"),
    ("^", "Puissance (associative à droite : 2^3^2 = 512)"),
    ("( )", "Parenthèses"),
    ("-N", "Moins unaire"),
    ("pi", "3.14159…"),
    ("e", "2.71828…"),
    ("ans", "Dernier résultat calculé"),
];

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.heading("Calculatrice RPN");
                ui.add_space(6.0);

                self.ui_entree(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_resultat(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_demarche(ui);
                self.ui_historique(ui);
                self.ui_aide(ui);
            });
    }

    fn ui_entree(&mut self, ui: &mut egui::Ui) {
        ui.label("Entrée :");

        let resp = ui.add(
            egui::TextEdit::singleline(&mut self.entree)
                .desired_width(ui.available_width())
                .hint_text("Ex: 2*(3+4), 2^3^2, -pi/2, ans+1")
                .id_salt("entree_edit")
                .code_editor(),
        );

        if self.focus_entree {
            resp.request_focus();
            self.focus_entree = false;
        }

        // Enter soumet (TextEdit singleline perd le focus sur Enter)
        if resp.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
            self.soumettre();
        }

        ui.add_space(6.0);

        ui.horizontal(|ui| {
            // Contrat: C = entrée seulement ; CLR = résultats seulement ; AC = tout
            self.bouton_action(ui, "C", "Efface seulement l’entrée", Action::ClearEntree);
            self.bouton_action(
                ui,
                "CLR",
                "Efface résultat + erreur + démarche",
                Action::ClearResultats,
            );
            self.bouton_action(
                ui,
                "AC",
                "Remise à zéro totale (ans et historique compris)",
                Action::ResetTotal,
            );
            self.bouton_action(ui, "DEL", "Efface le dernier symbole", Action::Backspace);
        });

        ui.add_space(8.0);

        ui.horizontal_wrapped(|ui| {
            for s in ["(", ")", "+", "-", "*", "/", "^"] {
                self.bouton_insert(ui, s, s);
            }

            ui.separator();

            for s in ["pi", "e", "ans"] {
                self.bouton_insert(ui, s, s);
            }

            ui.add_space(10.0);

            let eq = ui.add_sized([64.0, 32.0], egui::Button::new("="));
            if eq.clicked() {
                self.soumettre();
            }
        });

        ui.add_space(8.0);

        self.ui_pave_numerique(ui);

        if !self.erreur.is_empty() {
            ui.add_space(6.0);
            ui.colored_label(
                ui.visuals().error_fg_color,
                format!("Error: {}", self.erreur),
            );
        }
    }

    fn ui_pave_numerique(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_numerique")
            .num_columns(3)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for ligne in [["7", "8", "9"], ["4", "5", "6"], ["1", "2", "3"], ["0", ".", ""]] {
                    for s in ligne {
                        if s.is_empty() {
                            ui.label("");
                        } else {
                            self.bouton_insert(ui, s, s);
                        }
                    }
                    ui.end_row();
                }
            });
    }

    fn ui_resultat(&mut self, ui: &mut egui::Ui) {
        ui.label("Résultat :");
        let contenu = if self.resultat.is_empty() {
            String::new()
        } else {
            format!("= {}", self.resultat)
        };
        Self::champ_monospace(ui, "resultat_out", &contenu, 1);
    }

    fn ui_demarche(&mut self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Démarche")
            .default_open(false)
            .show(ui, |ui| {
                Self::champ_demarche(ui, "Jetons", "demarche_jetons", &self.demarche.jetons);
                Self::champ_demarche(ui, "RPN", "demarche_rpn", &self.demarche.rpn);
            });
    }

    fn ui_historique(&mut self, ui: &mut egui::Ui) {
        let titre = format!("Historique ({})", self.historique.len());
        let mut choisie: Option<String> = None;

        egui::CollapsingHeader::new(titre)
            .id_salt("historique")
            .default_open(true)
            .show(ui, |ui| {
                if self.historique.is_empty() {
                    ui.weak("(vide)");
                    return;
                }
                // plus récente en haut
                for ligne in self.historique.iter().rev() {
                    if ui.button(egui::RichText::new(ligne).monospace()).clicked() {
                        choisie = Some(ligne.to_string());
                    }
                }
            });

        if let Some(ligne) = choisie {
            self.entree = ligne;
            self.focus_entree = true;
        }
    }

    fn ui_aide(&mut self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Aide")
            .id_salt("aide")
            .open(self.aide_visible.then_some(true))
            .show(ui, |ui| {
                egui::Grid::new("aide_grille")
                    .num_columns(2)
                    .spacing([12.0, 4.0])
                    .show(ui, |ui| {
                        for (cle, texte) in AIDE {
                            ui.monospace(*cle);
                            ui.label(*texte);
                            ui.end_row();
                        }
                    });
            });

        // `open(Some(true))` ne vaut que pour une frame
        self.aide_visible = false;
    }

    fn champ_demarche(ui: &mut egui::Ui, titre: &str, id: &str, contenu: &str) {
        ui.add_space(4.0);
        ui.label(format!("{titre} :"));
        Self::champ_monospace(ui, id, contenu, 1);
    }

    fn champ_monospace(ui: &mut egui::Ui, id: &str, contenu: &str, rows: usize) {
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.push_id(id, |ui| {
                    ui.set_min_width(ui.available_width());
                    ui.set_min_height(
                        rows as f32 * ui.text_style_height(&egui::TextStyle::Monospace),
                    );
                    ui.monospace(contenu);
                });
            });
    }

    fn bouton_action(&mut self, ui: &mut egui::Ui, label: &str, tip: &str, action: Action) {
        let resp = ui
            .add_sized([56.0, 30.0], egui::Button::new(label))
            .on_hover_text(tip);

        if resp.clicked() {
            match action {
                Action::ClearEntree => self.clear_entree(),
                Action::ClearResultats => self.clear_resultats(),
                Action::ResetTotal => self.reset_total(),
                Action::Backspace => {
                    self.entree.pop();
                }
            }
            self.focus_entree = true;
        }
    }

    fn bouton_insert(&mut self, ui: &mut egui::Ui, label: &str, to_insert: &str) {
        let resp = ui.add_sized([46.0, 28.0], egui::Button::new(label));
        if resp.clicked() {
            self.entree.push_str(to_insert);
            self.focus_entree = true;
        }
    }

    /// Soumet la ligne courante : commande (help/clear/quit) ou expression.
    pub(crate) fn soumettre(&mut self) {
        let ligne = self.entree.trim().to_string();
        if ligne.is_empty() {
            return;
        }

        if let Some(cmd) = Commande::depuis(&ligne) {
            tracing::debug!(?cmd, "commande");
            self.entree.clear();
            match cmd {
                Commande::Aide => self.aide_visible = true,
                Commande::Effacer => self.clear_resultats(),
                Commande::Quitter => self.quitter = true,
            }
            self.focus_entree = true;
            return;
        }

        self.historique.ajouter(&ligne);
        self.eval_via_noyau(&ligne);
    }

    /// Évalue l’expression via le noyau, puis dépose résultat/démarche dans l’état UI.
    fn eval_via_noyau(&mut self, s: &str) {
        match evaluate_detaille(s, &self.ans) {
            Ok((v, d_noyau)) => {
                let d_ui = Demarche {
                    jetons: d_noyau.jetons,
                    rpn: d_noyau.rpn,
                };
                self.set_resultat(v, format_nombre(v), d_ui);
            }
            Err(e) => {
                tracing::info!(expr = s, erreur = %e, "expression refusée");
                self.set_erreur(e.to_string());
            }
        }
    }
}

#[derive(Clone, Copy, Debug)]
enum Action {
    ClearEntree,
    ClearResultats,
    ResetTotal,
    Backspace,
}
