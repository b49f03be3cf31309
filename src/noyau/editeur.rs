//! Éditeur d’expression (machine à états de la saisie).
//!
//! État : le texte affiché + deux drapeaux de fin de texte
//! (`dernier_chiffre`, `dernier_point`). Les drapeaux décrivent toujours la
//! classe du dernier caractère du texte après chaque transition.
//!
//! Grammaire imposée :
//! - pas de point en tête, pas deux points de suite
//! - pas deux opérateurs adjacents, au plus une opération binaire
//! - un '-' seul est accepté sur texte vide (signe)
//!
//! Aucune vue ici : la couche UI lit `texte()` et redessine après chaque action.

use tracing::{debug, warn};

use super::erreur::{ErreurCalcul, TEXTE_ERREUR};
use super::eval::evaluer_texte;
use super::format::formater_resultat;
use super::operation::{contient_operateur, Operation};

/// Issue d’un appui sur "=".
#[derive(Clone, Debug, PartialEq)]
pub enum Evaluation {
    /// Rien à évaluer (pas d’opération, ou texte finissant sur un opérateur/point).
    Ignoree,
    /// Résultat affiché.
    Resultat(f64),
    /// "Error" affiché.
    Erreur(ErreurCalcul),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EditeurExpression {
    texte: String,
    dernier_chiffre: bool,
    dernier_point: bool,
}

impl EditeurExpression {
    pub fn texte(&self) -> &str {
        &self.texte
    }

    #[cfg(test)]
    pub fn dernier_chiffre(&self) -> bool {
        self.dernier_chiffre
    }

    #[cfg(test)]
    pub fn dernier_point(&self) -> bool {
        self.dernier_point
    }

    /* ------------------------ Touches ------------------------ */

    /// Chiffre 0–9. Tout autre caractère est ignoré.
    /// Renvoie true si le texte a changé.
    pub fn append_digit(&mut self, d: char) -> bool {
        if !d.is_ascii_digit() {
            debug!(touche = %d, "chiffre refusé");
            return false;
        }
        self.texte.push(d);
        self.dernier_chiffre = true;
        self.dernier_point = false;
        true
    }

    /// C : retour à l’état initial.
    pub fn clear(&mut self) {
        self.texte.clear();
        self.dernier_chiffre = false;
        self.dernier_point = false;
    }

    /// Point décimal : seulement juste après un chiffre, jamais deux de suite.
    pub fn append_decimal_point(&mut self) -> bool {
        if !self.dernier_chiffre || self.dernier_point {
            debug!(texte = %self.texte, "point refusé");
            return false;
        }
        self.texte.push('.');
        self.dernier_chiffre = false;
        self.dernier_point = true;
        true
    }

    /// Opérateur binaire (ou signe '-' sur texte vide).
    pub fn append_operator(&mut self, op: Operation) -> bool {
        // Signe de tête : drapeaux inchangés (ils sont déjà à false sur texte vide).
        if self.texte.is_empty() && op == Operation::Moins {
            self.texte.push(op.symbole());
            return true;
        }

        if !self.dernier_chiffre || contient_operateur(&self.texte) {
            debug!(texte = %self.texte, op = %op.symbole(), "opérateur refusé");
            return false;
        }

        self.texte.push(op.symbole());
        self.dernier_chiffre = false;
        self.dernier_point = false;
        true
    }

    /// "=" : remplace le texte par le résultat (ou "Error").
    ///
    /// Ne fait rien si le texte ne finit pas par un chiffre ou ne contient
    /// aucune opération. Après un remplacement, les drapeaux sont recalculés
    /// depuis le nouveau texte.
    pub fn evaluate(&mut self) -> Evaluation {
        if !self.dernier_chiffre {
            return Evaluation::Ignoree;
        }

        let issue = match evaluer_texte(&self.texte) {
            None => return Evaluation::Ignoree,
            Some(Ok(v)) => {
                self.texte = formater_resultat(v);
                Evaluation::Resultat(v)
            }
            Some(Err(e)) => {
                warn!(texte = %self.texte, erreur = %e, "évaluation impossible");
                self.texte = TEXTE_ERREUR.to_string();
                Evaluation::Erreur(e)
            }
        };

        self.recalculer_drapeaux();
        issue
    }

    fn recalculer_drapeaux(&mut self) {
        let fin = self.texte.chars().last();
        self.dernier_chiffre = fin.is_some_and(|c| c.is_ascii_digit());
        self.dernier_point = fin == Some('.');
    }
}
