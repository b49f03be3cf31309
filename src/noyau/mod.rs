//! Noyau de la calculatrice (sans vue)
//!
//! Organisation interne :
//! - operation.rs : les quatre opérations + détection (ordre + - / *)
//! - erreur.rs    : erreurs typées, toutes affichées "Error"
//! - format.rs    : affichage du résultat ("20.0" -> "20")
//! - eval.rs      : découpe en deux opérandes + calcul
//! - editeur.rs   : machine à états de la saisie (texte + drapeaux)

pub mod editeur;
pub mod erreur;
pub mod eval;
pub mod format;
pub mod operation;

#[cfg(test)]
mod tests_proprietes;


// API publique minimale
pub use editeur::{EditeurExpression, Evaluation};
pub use operation::Operation;
