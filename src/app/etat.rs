//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : posséder l’éditeur du noyau et lui transmettre les appuis,
//! un point d’entrée typé par classe de bouton.
//!
//! Contrats :
//! - Aucune évaluation ici (le noyau s’en charge).
//! - La vue ne touche jamais au texte : elle lit `affichage()` et redessine.

use tracing::debug;

use crate::noyau::{EditeurExpression, Evaluation, Operation};

/// Un bouton (ou sa touche clavier équivalente).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Touche {
    Chiffre(char),
    Point,
    Operateur(Operation),
    Effacer,
    Egal,
}

impl Touche {
    /// Libellé affiché sur le bouton.
    pub fn libelle(self) -> String {
        match self {
            Touche::Chiffre(d) => d.to_string(),
            Touche::Point => ".".to_string(),
            Touche::Operateur(op) => op.symbole().to_string(),
            Touche::Effacer => "C".to_string(),
            Touche::Egal => "=".to_string(),
        }
    }

    /// Saisie clavier texte -> touche ('=' évalue, le reste suit les libellés).
    pub fn depuis_caractere(c: char) -> Option<Self> {
        match c {
            '0'..='9' => Some(Touche::Chiffre(c)),
            '.' => Some(Touche::Point),
            '=' => Some(Touche::Egal),
            _ => Operation::depuis_symbole(c).map(Touche::Operateur),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppCalc {
    editeur: EditeurExpression,
}

impl AppCalc {
    /// Texte à afficher tel quel.
    pub fn affichage(&self) -> &str {
        self.editeur.texte()
    }

    /* ------------------------ Actions “boutons” ------------------------ */

    pub fn chiffre(&mut self, d: char) {
        self.editeur.append_digit(d);
    }

    pub fn point(&mut self) {
        self.editeur.append_decimal_point();
    }

    pub fn operateur(&mut self, op: Operation) {
        self.editeur.append_operator(op);
    }

    /// C : remise à zéro.
    pub fn effacer(&mut self) {
        self.editeur.clear();
    }

    /// "=" : l’issue n’est utile qu’au journal, l’écran suit l’éditeur.
    pub fn egal(&mut self) -> Evaluation {
        let issue = self.editeur.evaluate();
        debug!(?issue, affichage = %self.affichage(), "égal");
        issue
    }

    /// Aiguillage unique (vue + clavier).
    pub fn appuyer(&mut self, t: Touche) {
        match t {
            Touche::Chiffre(d) => self.chiffre(d),
            Touche::Point => self.point(),
            Touche::Operateur(op) => self.operateur(op),
            Touche::Effacer => self.effacer(),
            Touche::Egal => {
                self.egal();
            }
        }
    }
}
