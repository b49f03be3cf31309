// src/noyau/erreur.rs
//
// Erreurs du noyau.
// Côté affichage, toutes se réduisent au même texte (TEXTE_ERREUR) :
// la variante ne sert qu’au journal et aux tests.

use thiserror::Error;

/// Texte affiché pour toute erreur d’évaluation.
pub const TEXTE_ERREUR: &str = "Error";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErreurCalcul {
    #[error("division par zéro")]
    DivisionParZero,

    #[error("opérande invalide: {0:?}")]
    OperandeInvalide(String),

    #[error("résultat non fini (dépassement)")]
    ResultatNonFini,
}

pub type Resultat<T> = std::result::Result<T, ErreurCalcul>;
