// src/noyau/operation.rs
//
// Les quatre opérations binaires + leur détection dans le texte affiché.
//
// Règles:
// - Ordre de détection FIXE : + puis - puis / puis *
//   (un texte contenant plusieurs symboles donne la première opération de cet ordre,
//    pas la première rencontrée de gauche à droite)
// - Un '-' en position 0 est un signe : la garde de saisie (contient_operateur)
//   l’ignore, mais la détection à l’évaluation le voit (cf. eval.rs).

use num_traits::Float;

use super::erreur::{ErreurCalcul, Resultat};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operation {
    Plus,
    Moins,
    Fois,
    Divise,
}

/// Ordre de détection (ne pas trier).
pub const PRIORITE: [Operation; 4] = [
    Operation::Plus,
    Operation::Moins,
    Operation::Divise,
    Operation::Fois,
];

impl Operation {
    pub fn symbole(self) -> char {
        match self {
            Operation::Plus => '+',
            Operation::Moins => '-',
            Operation::Fois => '*',
            Operation::Divise => '/',
        }
    }

    pub fn depuis_symbole(c: char) -> Option<Self> {
        match c {
            '+' => Some(Operation::Plus),
            '-' => Some(Operation::Moins),
            '*' => Some(Operation::Fois),
            '/' => Some(Operation::Divise),
            _ => None,
        }
    }

    /// Calcule `a op b`.
    /// Division par zéro et résultat infini/NaN => erreur (jamais affichés).
    pub fn appliquer<T: Float>(self, a: T, b: T) -> Resultat<T> {
        let r = match self {
            Operation::Plus => a + b,
            Operation::Moins => a - b,
            Operation::Fois => a * b,
            Operation::Divise => {
                if b.is_zero() {
                    return Err(ErreurCalcul::DivisionParZero);
                }
                a / b
            }
        };

        if r.is_finite() {
            Ok(r)
        } else {
            Err(ErreurCalcul::ResultatNonFini)
        }
    }
}

/// Retire un éventuel signe de tête. Renvoie (signe_present, corps).
pub fn separer_signe(texte: &str) -> (bool, &str) {
    match texte.strip_prefix('-') {
        Some(corps) => (true, corps),
        None => (false, texte),
    }
}

/// Première opération (dans l’ordre PRIORITE) présente dans `texte`.
pub fn detecter(texte: &str) -> Option<Operation> {
    PRIORITE
        .iter()
        .copied()
        .find(|op| texte.contains(op.symbole()))
}

/// Vrai si un opérateur binaire est déjà présent (signe de tête exclu).
pub fn contient_operateur(texte: &str) -> bool {
    let (_, corps) = separer_signe(texte);
    detecter(corps).is_some()
}
