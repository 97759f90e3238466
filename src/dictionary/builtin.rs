//! A small built-in slang lexicon for demos and tests.

use crate::dictionary::entry::{Dictionary, DictionaryEntry};
use crate::dictionary::relationship::{RelationshipRecord, RelationshipTable};

/// Built-in sample data.
pub struct BuiltinLexicon;

impl BuiltinLexicon {
    /// Dictionary entries of the sample lexicon.
    pub fn entries() -> Dictionary {
        // (key, part of speech, definition, example)
        let entries = vec![
            ("8080", "adjective", "Leetspeak for 'bobo'; calling someone foolish.", "Ang 8080 mo talaga."),
            ("Sped", "noun", "Short for special education, thrown at someone acting slow.", "Don't be such a Sped."),
            ("rizz", "noun", "Charisma, especially skill at attracting a partner.", "He has unspoken rizz."),
            ("rizzler", "noun", "Someone with an abundance of rizz.", "Certified rizzler behavior."),
            ("aura", "noun", "The vibe or social standing a person gives off.", "That move cost you aura."),
            ("bussin", "adjective", "Extremely good, usually about food.", "This adobo is bussin."),
            ("cap", "noun", "A lie or an exaggeration.", "That's cap and you know it."),
            ("no cap", "phrase", "For real; no lie.", "Best burger in town, no cap."),
            ("sus", "adjective", "Suspicious or shady.", "He was acting kinda sus."),
            ("slay", "verb", "To do something exceptionally well.", "You slayed that presentation."),
            ("delulu", "adjective", "Delusional, especially about a crush.", "She is delulu about him."),
            ("mid", "adjective", "Mediocre; average at best.", "The sequel was mid."),
            ("goat", "noun", "Greatest of all time.", "Messi is the goat."),
            ("ghosting", "verb", "Suddenly cutting off all communication.", "He's been ghosting me."),
            ("lowkey", "adverb", "Secretly or somewhat.", "I lowkey want to stay home."),
            ("highkey", "adverb", "Openly or very much.", "I highkey love this song."),
            ("salty", "adjective", "Bitter or upset over something minor.", "Still salty about that loss."),
            ("simp", "noun", "Someone who does too much for a person they like.", "Stop being a simp."),
            ("stan", "noun", "An extremely devoted fan.", "I stan this band."),
            ("petmalu", "adjective", "Reverse slang for 'malupit'; awesome.", "Petmalu ang performance!"),
            ("lodi", "noun", "Reverse slang for 'idol'.", "Lodi kita, pare."),
            ("werpa", "noun", "Reverse slang for 'power'; a cheer.", "Werpa sa lahat!"),
        ];

        Dictionary::from_entries(entries.into_iter().map(
            |(key, part_of_speech, definition, example)| {
                DictionaryEntry::new(key, definition)
                    .with_part_of_speech(part_of_speech)
                    .with_example(example)
            },
        ))
    }

    /// Relationship records of the sample lexicon.
    ///
    /// The data keeps a couple of authoring slips ("breadcrumbing" names no
    /// record, "Lodi" is miscased) so diagnostics have something to report.
    pub fn relationships() -> RelationshipTable {
        let records: &[(&str, &[&str], &[&str])] = &[
            ("8080", &["bobo", "tanga", "eight zero eight zero"], &["Sped"]),
            ("Sped", &["slow", "special ed"], &["8080"]),
            ("rizz", &["riz", "charisma", "game"], &["rizzler", "aura"]),
            ("rizzler", &["rizz god"], &[]),
            ("aura", &["vibe", "aura points"], &["rizz"]),
            ("bussin", &["bussing", "fire"], &["slay"]),
            ("cap", &["lie", "capping"], &["no cap", "sus"]),
            ("no cap", &["for real", "fr", "deadass"], &["cap"]),
            ("sus", &["suspicious", "sketchy"], &["cap"]),
            ("slay", &["ate it", "killed it"], &["bussin", "goat"]),
            ("delulu", &["delusional"], &["simp"]),
            ("mid", &["meh", "average"], &["goat"]),
            ("goat", &["g.o.a.t", "greatest of all time"], &["slay"]),
            ("ghosting", &["ghosted", "ghost"], &["breadcrumbing"]),
            ("lowkey", &["low key", "kinda"], &["highkey"]),
            ("highkey", &["high key"], &["lowkey"]),
            ("salty", &["bitter", "pressed"], &["mid"]),
            ("simp", &["simping"], &["stan", "delulu"]),
            ("stan", &["superfan"], &["simp"]),
            ("petmalu", &["malupit", "lupet"], &["lodi", "werpa"]),
            ("lodi", &["idol"], &["petmalu"]),
            ("werpa", &["power"], &["petmalu", "Lodi"]),
        ];

        RelationshipTable::from_records(records.iter().map(|&(word, alternatives, related)| {
            RelationshipRecord::new(word)
                .with_alternatives(alternatives.iter().copied())
                .with_related(related.iter().copied())
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::relationship::TableDiagnostic;

    #[test]
    fn test_every_record_has_an_entry() {
        let entries = BuiltinLexicon::entries();
        let table = BuiltinLexicon::relationships();

        assert_eq!(entries.len(), table.len());
        for word in table.keys() {
            assert!(entries.contains(word), "missing entry for {word}");
        }
    }

    #[test]
    fn test_known_authoring_slips() {
        let diagnostics = BuiltinLexicon::relationships().diagnostics();

        assert_eq!(diagnostics.len(), 2);
        assert!(diagnostics.contains(&TableDiagnostic::DanglingRelated {
            word: "ghosting".to_string(),
            related: "breadcrumbing".to_string(),
        }));
        assert!(diagnostics.contains(&TableDiagnostic::CaseMismatchedRelated {
            word: "werpa".to_string(),
            related: "Lodi".to_string(),
            candidate: "lodi".to_string(),
        }));
    }
}
