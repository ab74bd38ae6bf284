use super::AdviceKind;
use super::client::Message;
use crate::pipeline::FeatureRecord;

const SYSTEM: &str = "You are a fashion assistant and a cosmetic advisor. \
    Answer the user's questions about fashion and cosmetics. \
    You have to answer in the format of the given example.";

// Few-shot format examples. The reply parser depends on the
// `N. #rrggbb (name): explanation` line convention these establish.
const GOOD_FORMAT: &str = "\
I want to know which 5 colours will look good on me and why? Be creative and answer in the given format, example:
1. #f4e1cb (peach): Peach complements your warm facial features and will give you a fresh and radiant look.
2. #4b86b4 (steel blue): Steel blue will enhance the cool tones in your eyes and create a striking contrast with your warm facial features.
3. #f9c1bb (coral pink): Coral pink will bring out the rosy tones in your lips and cheeks.
4. #82647a (mauve): Mauve will complement the subtle tones in your nose and jaw area.
5. #ffd966 (mustard yellow): Mustard yellow will enhance the warmth in your facial features and add a touch of sunshine to your overall appearance.";

const BAD_FORMAT: &str = "\
I want to know which 5 colours will NOT complement me and why? Be creative but never be rude and answer in the given format, example:
1. #687864 (sage green): This cool-toned green might clash with the warm tones of your eye, nose, and lip colors.
2. #874c62 (mauve): The muted pink undertones of mauve might make your lip color appear dull in comparison.
3. #433d4f (charcoal gray): The deep gray might overpower the softness of your jaw and nose colors.
4. #b28975 (mocha): The brown undertones of mocha might blend in too much with your jaw color.
5. #91a8d0 (periwinkle blue): The cool-toned blue might not harmonize well with the warm hues of your eyes and lips.";

const BLUSH_FORMAT: &str = "\
I want to know which 5 blush colours will look good on me and why? Be creative and answer in the given format, example:
1. #ffffff (white): White will provide a striking contrast to your lip color, making it pop even more.
2. #2a9d8f (teal): Teal is a cool and calming color that will complement the warmth of your lip color.
3. #f9c22e (mustard yellow): Mustard yellow will add a vibrant touch to your look.
4. #6b5b95 (lavender): Lavender is a soft and romantic color that will enhance the femininity of your lip color.
5. #e07a5f (terracotta): Terracotta is an earthy and warm color that will harmonize beautifully with your lip color.";

fn feature_summary(record: &FeatureRecord) -> String {
    format!(
        "My facial features hexcodes are left eye colour == {}, right eye colour == {}, \
         nose colour == {}, jaw colour == {}, and lips colour == {}.",
        record.left_eye, record.right_eye, record.nose, record.jaw, record.lips
    )
}

pub(super) fn messages(record: &FeatureRecord, kind: AdviceKind) -> Vec<Message> {
    let (summary, format) = match kind {
        AdviceKind::GoodPalette => (feature_summary(record), GOOD_FORMAT),
        AdviceKind::BadPalette => (feature_summary(record), BAD_FORMAT),
        // blush advice keys off the lips color alone
        AdviceKind::Blush => (
            format!("My facial features hexcode of lips is {}.", record.lips),
            BLUSH_FORMAT,
        ),
    };

    vec![
        Message::system(SYSTEM),
        Message::user(summary),
        Message::user(format),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;

    fn record() -> FeatureRecord {
        FeatureRecord {
            left_eye: Color::from_hex("#dfb8aa").unwrap(),
            right_eye: Color::from_hex("#c39e8e").unwrap(),
            nose: Color::from_hex("#d09d82").unwrap(),
            jaw: Color::from_hex("#e4c1ad").unwrap(),
            lips: Color::from_hex("#c34a5b").unwrap(),
        }
    }

    #[test]
    fn test_palette_prompts_carry_all_five_colors() {
        for kind in [AdviceKind::GoodPalette, AdviceKind::BadPalette] {
            let msgs = messages(&record(), kind);
            assert_eq!(msgs.len(), 3);
            let summary = &msgs[1].content;
            for hex in ["#dfb8aa", "#c39e8e", "#d09d82", "#e4c1ad", "#c34a5b"] {
                assert!(summary.contains(hex), "{kind:?} summary missing {hex}");
            }
        }
    }

    #[test]
    fn test_blush_prompt_carries_lips_only() {
        let msgs = messages(&record(), AdviceKind::Blush);
        let summary = &msgs[1].content;
        assert!(summary.contains("lips is #c34a5b"));
        assert!(!summary.contains("#dfb8aa"));
    }

    #[test]
    fn test_format_examples_parse_with_own_grammar() {
        for format in [GOOD_FORMAT, BAD_FORMAT, BLUSH_FORMAT] {
            let lines = crate::advice::parse::parse_advice(format).unwrap();
            assert_eq!(lines.len(), 5);
        }
    }
}
