//! Tests de propriétés : suites de touches arbitraires.
//!
//! Invariants vérifiés après CHAQUE appui :
//! - les drapeaux décrivent la classe du dernier caractère du texte
//! - au plus un opérateur binaire après le signe de tête
//! - jamais "..", jamais de point en tête
//! - jamais "inf" / "NaN" à l’écran

use proptest::prelude::*;

use super::editeur::EditeurExpression;
use super::operation::{separer_signe, Operation, PRIORITE};

#[derive(Clone, Copy, Debug)]
enum Appui {
    Chiffre(char),
    Point,
    Op(Operation),
    Clear,
    Egal,
}

fn appui() -> impl Strategy<Value = Appui> {
    prop_oneof![
        5 => proptest::char::range('0', '9').prop_map(Appui::Chiffre),
        2 => Just(Appui::Point),
        3 => proptest::sample::select(PRIORITE.to_vec()).prop_map(Appui::Op),
        1 => Just(Appui::Clear),
        2 => Just(Appui::Egal),
    ]
}

fn jouer(e: &mut EditeurExpression, a: Appui) {
    match a {
        Appui::Chiffre(d) => {
            e.append_digit(d);
        }
        Appui::Point => {
            e.append_decimal_point();
        }
        Appui::Op(op) => {
            e.append_operator(op);
        }
        Appui::Clear => e.clear(),
        Appui::Egal => {
            e.evaluate();
        }
    }
}

fn nb_operateurs(s: &str) -> usize {
    s.chars()
        .filter(|c| Operation::depuis_symbole(*c).is_some())
        .count()
}

proptest! {
    #[test]
    fn chiffres_concatenes_dans_l_ordre(chiffres in "[0-9]{0,40}") {
        let mut e = EditeurExpression::default();
        for d in chiffres.chars() {
            prop_assert!(e.append_digit(d));
        }
        prop_assert_eq!(e.texte(), chiffres.as_str());
    }

    #[test]
    fn invariants_apres_chaque_appui(appuis in proptest::collection::vec(appui(), 0..60)) {
        let mut e = EditeurExpression::default();

        for a in appuis {
            jouer(&mut e, a);
            let t = e.texte();
            let fin = t.chars().last();

            prop_assert_eq!(e.dernier_chiffre(), fin.is_some_and(|c| c.is_ascii_digit()), "{:?} après {:?}", t, a);
            prop_assert_eq!(e.dernier_point(), fin == Some('.'), "{:?} après {:?}", t, a);

            let (_, corps) = separer_signe(t);
            prop_assert!(nb_operateurs(corps) <= 1, "{:?}", t);

            prop_assert!(!t.contains(".."), "{:?}", t);
            prop_assert!(!t.starts_with('.'), "{:?}", t);
            prop_assert!(!t.contains("inf") && !t.contains("NaN"), "{:?}", t);
        }
    }

    #[test]
    fn clear_remet_a_zero(appuis in proptest::collection::vec(appui(), 0..40)) {
        let mut e = EditeurExpression::default();
        for a in appuis {
            jouer(&mut e, a);
        }
        e.clear();
        prop_assert_eq!(e, EditeurExpression::default());
    }

    #[test]
    fn point_jamais_deux_fois_de_suite(appuis in proptest::collection::vec(appui(), 0..40)) {
        let mut e = EditeurExpression::default();
        for a in appuis {
            jouer(&mut e, a);
        }
        let avant = e.texte().to_string();
        let accepte = e.append_decimal_point();
        prop_assert_eq!(accepte, avant.ends_with(|c: char| c.is_ascii_digit()));
        if accepte {
            prop_assert!(!e.append_decimal_point());
        }
    }
}
