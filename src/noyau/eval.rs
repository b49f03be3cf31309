//! Noyau — évaluation d’une expression à deux opérandes
//!
//! texte -> détection opération (ordre + - / *, texte entier, signe compris)
//!       -> signe de tête -> découpe -> lecture des deux opérandes -> calcul
//!
//! La détection voit le signe de tête : "-7*2" détecte '-', puis la découpe
//! du corps "7*2" échoue et rien n'est évalué.
//!
//! Remarque : aucune priorité, aucun chaînage. Une seule opération binaire
//! est représentable dans le texte affiché.

use tracing::debug;

use super::erreur::{ErreurCalcul, Resultat};
use super::operation::{detecter, separer_signe, Operation};

/// Évalue le texte affiché.
/// - `None` : aucune opération représentable (ex: "42", "-5", "-7*2") => rien à faire
/// - `Some(Err(_))` : opérande illisible, division par zéro, dépassement
pub fn evaluer_texte(texte: &str) -> Option<Resultat<f64>> {
    let op = detecter(texte)?;
    let (signe, corps) = separer_signe(texte);
    let (gauche, droite) = decouper(corps, op)?;

    debug!(%texte, op = %op.symbole(), gauche, droite, "évaluation");

    Some(calculer(signe, gauche, droite, op))
}

/// Coupe `corps` sur la PREMIÈRE occurrence de l’opérateur.
pub fn decouper(corps: &str, op: Operation) -> Option<(&str, &str)> {
    corps.split_once(op.symbole())
}

fn calculer(signe: bool, gauche: &str, droite: &str, op: Operation) -> Resultat<f64> {
    let a = lire_operande(gauche)?;
    let a = if signe { -a } else { a };
    let b = lire_operande(droite)?;
    op.appliquer(a, b)
}

/// Lecture stricte : chiffres et '.' seulement (pas de "inf", "NaN", exposant…).
fn lire_operande(s: &str) -> Resultat<f64> {
    let invalide = || ErreurCalcul::OperandeInvalide(s.to_string());

    if s.is_empty() || !s.chars().all(|c| c.is_ascii_digit() || c == '.') {
        return Err(invalide());
    }
    s.parse::<f64>().map_err(|_| invalide())
}
