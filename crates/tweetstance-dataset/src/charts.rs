//! Aggregates behind the exploration charts. Pure functions over a loaded
//! dataset; rendering happens elsewhere.

use std::collections::HashMap;

use tweetstance_core::Sentiment;

use crate::dataset::TweetDataset;

/// How often one label occurs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabelCount {
    pub sentiment: Sentiment,
    pub count: usize,
}

/// Share of one label, as a percentage of all records.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelShare {
    pub sentiment: Sentiment,
    pub percent: f32,
}

/// How often one word occurs across every message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordCount {
    pub word: String,
    pub count: usize,
}

/// Tokens skipped by [`word_frequencies`]: English filler plus the residue
/// twitter text carries (retweet markers, shortened-link fragments).
/// Kept sorted so lookups can binary search.
const STOP_WORDS: &[&str] = &[
    "about", "after", "all", "also", "am", "amp", "an", "and", "any", "are", "as", "at", "be",
    "because", "been", "before", "being", "between", "both", "but", "by", "can", "co", "could",
    "did", "do", "does", "down", "each", "for", "from", "had", "has", "have", "he", "her", "here",
    "him", "his", "how", "http", "https", "if", "in", "into", "is", "it", "its", "just", "me",
    "more", "most", "my", "no", "not", "now", "of", "on", "or", "other", "our", "out", "over",
    "rt", "she", "should", "so", "some", "such", "than", "that", "the", "their", "them", "then",
    "there", "these", "they", "this", "those", "to", "too", "up", "us", "very", "was", "we",
    "were", "what", "when", "where", "which", "who", "why", "will", "with", "would", "you",
    "your",
];

/// Per-label record counts, largest first. Labels with no records are
/// omitted; equal counts order by sentiment code.
#[must_use]
pub fn label_counts(dataset: &TweetDataset) -> Vec<LabelCount> {
    let mut counts: Vec<LabelCount> = Sentiment::ALL
        .into_iter()
        .map(|sentiment| LabelCount {
            sentiment,
            count: dataset
                .records()
                .iter()
                .filter(|record| record.sentiment == sentiment)
                .count(),
        })
        .filter(|label| label.count > 0)
        .collect();
    counts.sort_by(|a, b| {
        b.count
            .cmp(&a.count)
            .then(a.sentiment.code().cmp(&b.sentiment.code()))
    });
    counts
}

/// Per-label shares in percent, largest first. Shares sum to 100 (modulo
/// float rounding); an empty dataset yields no shares rather than a
/// division by zero.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn label_shares(dataset: &TweetDataset) -> Vec<LabelShare> {
    let total = dataset.len();
    if total == 0 {
        return Vec::new();
    }
    label_counts(dataset)
        .into_iter()
        .map(|label| LabelShare {
            sentiment: label.sentiment,
            percent: label.count as f32 * 100.0 / total as f32,
        })
        .collect()
}

/// The `limit` most frequent message words, stopwords removed. Equal counts
/// order alphabetically so the cloud is stable across runs.
#[must_use]
pub fn word_frequencies(dataset: &TweetDataset, limit: usize) -> Vec<WordCount> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    for record in dataset.records() {
        for token in tokenize(&record.message) {
            if STOP_WORDS.binary_search(&token.as_str()).is_ok() {
                continue;
            }
            *counts.entry(token).or_insert(0) += 1;
        }
    }

    let mut words: Vec<WordCount> = counts
        .into_iter()
        .map(|(word, count)| WordCount { word, count })
        .collect();
    words.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.word.cmp(&b.word)));
    words.truncate(limit);
    words
}

/// Lowercased alphanumeric runs of at least two characters.
fn tokenize(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|token| token.chars().count() >= 2)
        .map(str::to_lowercase)
}

#[cfg(test)]
mod tests {
    use crate::dataset::TweetRecord;

    use super::*;

    fn dataset_of(rows: &[(Sentiment, &str)]) -> TweetDataset {
        TweetDataset::from_records(
            rows.iter()
                .enumerate()
                .map(|(i, (sentiment, message))| TweetRecord {
                    sentiment: *sentiment,
                    message: (*message).to_string(),
                    tweet_id: i as u64,
                })
                .collect(),
        )
    }

    #[test]
    fn label_counts_sort_by_count_then_code() {
        let dataset = dataset_of(&[
            (Sentiment::Pro, "a"),
            (Sentiment::Pro, "b"),
            (Sentiment::News, "c"),
            (Sentiment::News, "d"),
            (Sentiment::Anti, "e"),
        ]);
        let counts = label_counts(&dataset);
        let order: Vec<_> = counts.iter().map(|c| (c.sentiment, c.count)).collect();
        assert_eq!(
            order,
            vec![
                (Sentiment::Pro, 2),
                (Sentiment::News, 2),
                (Sentiment::Anti, 1),
            ]
        );
        let total: usize = counts.iter().map(|c| c.count).sum();
        assert_eq!(total, dataset.len());
    }

    #[test]
    fn absent_labels_are_omitted() {
        let dataset = dataset_of(&[(Sentiment::Neutral, "meh")]);
        let counts = label_counts(&dataset);
        assert_eq!(counts.len(), 1);
        assert_eq!(counts[0].sentiment, Sentiment::Neutral);
    }

    #[test]
    fn label_shares_sum_to_one_hundred() {
        let dataset = dataset_of(&[
            (Sentiment::Pro, "a"),
            (Sentiment::Pro, "b"),
            (Sentiment::Anti, "c"),
        ]);
        let shares = label_shares(&dataset);
        let total: f32 = shares.iter().map(|s| s.percent).sum();
        assert!((total - 100.0).abs() < 1e-4, "total was {total}");
        assert!((shares[0].percent - 66.6667).abs() < 1e-3);
    }

    #[test]
    fn empty_dataset_yields_no_aggregates() {
        let dataset = TweetDataset::from_records(Vec::new());
        assert!(label_counts(&dataset).is_empty());
        assert!(label_shares(&dataset).is_empty());
        assert!(word_frequencies(&dataset, 50).is_empty());
    }

    #[test]
    fn word_frequencies_fold_case_and_drop_stopwords() {
        let dataset = dataset_of(&[
            (Sentiment::Pro, "Climate CHANGE is the real climate emergency"),
            (Sentiment::Anti, "climate hoax"),
        ]);
        let words = word_frequencies(&dataset, 50);
        assert_eq!(words[0].word, "climate");
        assert_eq!(words[0].count, 3);
        assert!(words.iter().all(|w| w.word != "the" && w.word != "is"));
    }

    #[test]
    fn word_frequencies_break_ties_alphabetically_and_honor_the_limit() {
        let dataset = dataset_of(&[(Sentiment::Neutral, "zebra apple zebra apple mango")]);
        let words = word_frequencies(&dataset, 2);
        assert_eq!(words.len(), 2);
        assert_eq!(words[0].word, "apple");
        assert_eq!(words[1].word, "zebra");
    }

    #[test]
    fn stopword_table_is_sorted_for_binary_search() {
        for pair in STOP_WORDS.windows(2) {
            assert!(pair[0] < pair[1], "{:?} out of order", pair);
        }
    }
}
