// src/noyau/format.rs

/// Suffixe retiré des résultats entiers.
const SUFFIXE_ENTIER: &str = ".0";

/// Formate un résultat pour l’affichage.
/// - écriture décimale la plus courte qui relit la même valeur (jamais d’exposant)
/// - "20.0" -> "20"
pub fn formater_resultat(v: f64) -> String {
    retirer_point_zero(&format!("{v}")).to_string()
}

/// Retire le suffixe littéral ".0" s’il est présent (une seule fois).
pub fn retirer_point_zero(s: &str) -> &str {
    s.strip_suffix(SUFFIXE_ENTIER).unwrap_or(s)
}
