//! Text normalisation for Portuguese sentiment input.
//!
//! Replicates the preprocessing the deployed model was trained against:
//! lowercase, strip URLs and @mentions/#hashtags, keep only ASCII letters
//! and whitespace, then drop Portuguese stopwords. The vectorizer's
//! vocabulary was fitted on text cleaned exactly this way, so any drift
//! here silently degrades prediction quality instead of erroring.

use std::collections::HashSet;

use regex::Regex;

/// Portuguese stopword list (NLTK `stopwords.words('portuguese')`).
///
/// Kept verbatim from the training-time resource, accented entries
/// included, even though accents are stripped before the filter runs:
/// "não" reaches the filter as "no", which the list also carries.
const STOPWORDS_PT: &[&str] = &[
    "de", "a", "o", "que", "e", "é", "do", "da", "em", "um", "para", "com",
    "não", "uma", "os", "no", "se", "na", "por", "mais", "as", "dos", "como",
    "mas", "ao", "ele", "das", "à", "seu", "sua", "ou", "quando", "muito",
    "nos", "já", "eu", "também", "só", "pelo", "pela", "até", "isso", "ela",
    "entre", "depois", "sem", "mesmo", "aos", "seus", "quem", "nas", "me",
    "esse", "eles", "você", "essa", "num", "nem", "suas", "meu", "às",
    "minha", "numa", "pelos", "elas", "qual", "nós", "lhe", "deles", "essas",
    "esses", "pelas", "este", "dele", "tu", "te", "vocês", "vos", "lhes",
    "meus", "minhas", "teu", "tua", "teus", "tuas", "nosso", "nossa",
    "nossos", "nossas", "dela", "delas", "esta", "estes", "estas", "aquele",
    "aquela", "aqueles", "aquelas", "isto", "aquilo", "estou", "está",
    "estamos", "estão", "estive", "esteve", "estivemos", "estiveram",
    "estava", "estávamos", "estavam", "estivera", "estivéramos", "esteja",
    "estejamos", "estejam", "estivesse", "estivéssemos", "estivessem",
    "estiver", "estivermos", "estiverem", "hei", "há", "havemos", "hão",
    "houve", "houvemos", "houveram", "houvera", "houvéramos", "haja",
    "hajamos", "hajam", "houvesse", "houvéssemos", "houvessem", "houver",
    "houvermos", "houverem", "houverei", "houverá", "houveremos",
    "houverão", "houveria", "houveríamos", "houveriam", "sou", "somos",
    "são", "era", "éramos", "eram", "fui", "foi", "fomos", "foram", "fora",
    "fôramos", "seja", "sejamos", "sejam", "fosse", "fôssemos", "fossem",
    "for", "formos", "forem", "serei", "será", "seremos", "serão", "seria",
    "seríamos", "seriam", "tenho", "tem", "temos", "têm", "tinha",
    "tínhamos", "tinham", "tive", "teve", "tivemos", "tiveram", "tivera",
    "tivéramos", "tenha", "tenhamos", "tenham", "tivesse", "tivéssemos",
    "tivessem", "tiver", "tivermos", "tiverem", "terei", "terá", "teremos",
    "terão", "teria", "teríamos", "teriam",
];

/// Deterministic normaliser for raw user text.
///
/// Holds the compiled patterns and the stopword set; `normalize` is a pure
/// function of its input.
pub struct Normalizer {
    url_regex: Regex,
    mention_regex: Regex,
    non_letter_regex: Regex,
    stopwords: HashSet<&'static str>,
}

impl Normalizer {
    pub fn new() -> Self {
        Self {
            url_regex: Regex::new(r"https?://\S+|www\.\S+").unwrap(),
            mention_regex: Regex::new(r"[@#]\w+").unwrap(),
            non_letter_regex: Regex::new(r"[^a-z\s]").unwrap(),
            stopwords: STOPWORDS_PT.iter().copied().collect(),
        }
    }

    /// Normalise raw text into the form the vectorizer was fitted on.
    ///
    /// Order matters and must not change independently of the model
    /// artifacts:
    ///
    /// 1. lowercase
    /// 2. strip URL tokens (`http://`, `https://`, `www.`)
    /// 3. strip @mention and #hashtag tokens
    /// 4. strip everything that is not an ASCII letter or whitespace
    ///    (accented characters drop out here, as at training time)
    /// 5. split on whitespace, drop stopwords, rejoin with single spaces
    ///
    /// Empty input yields empty output; so does input consisting entirely
    /// of stopwords, URLs, or punctuation. Neither is an error: the
    /// vectorizer maps an empty document to a zero vector.
    pub fn normalize(&self, text: &str) -> String {
        let text = text.to_lowercase();
        let text = self.url_regex.replace_all(&text, "");
        let text = self.mention_regex.replace_all(&text, "");
        let text = self.non_letter_regex.replace_all(&text, "");

        text.split_whitespace()
            .filter(|token| !self.stopwords.contains(token))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn norm(text: &str) -> String {
        Normalizer::new().normalize(text)
    }

    #[test]
    fn lowercases_input() {
        assert_eq!(norm("Bom Dia"), "bom dia");
    }

    #[test]
    fn empty_input_empty_output() {
        assert_eq!(norm(""), "");
    }

    #[test]
    fn whitespace_only_input() {
        assert_eq!(norm("   \t\n  "), "");
    }

    #[test]
    fn stopwords_only_yields_empty() {
        assert_eq!(norm("de a o"), "");
    }

    #[test]
    fn strips_urls() {
        let out = norm("veja https://exemplo.com/abc agora");
        assert!(!out.contains("https"), "got {out:?}");
        assert!(!out.contains("exemplo"), "got {out:?}");
        assert!(out.contains("veja"));
    }

    #[test]
    fn strips_www_urls() {
        let out = norm("acesse www.exemplo.com.br hoje");
        assert!(!out.contains("exemplo"), "got {out:?}");
        assert!(out.contains("acesse"));
    }

    #[test]
    fn strips_mentions_and_hashtags() {
        let out = norm("parabéns @usuario pelo #evento ótimo");
        assert!(!out.contains("usuario"), "got {out:?}");
        assert!(!out.contains("evento"), "got {out:?}");
        assert!(out.contains("timo"), "accent-stripped 'ótimo' should survive");
    }

    #[test]
    fn strips_digits_and_punctuation() {
        assert_eq!(norm("nota 10, sem duvida!!!"), "nota duvida");
    }

    #[test]
    fn accented_characters_drop_out() {
        // "incrível" loses the accented vowel exactly as at training time.
        assert_eq!(norm("festa incrível"), "festa incrvel");
    }

    #[test]
    fn accented_stopwords_collapse_to_stopwords() {
        // "não" strips to "no", which the stopword filter still removes.
        assert_eq!(norm("não é bom"), "bom");
    }

    #[test]
    fn url_mention_scenario() {
        let out = norm("Veja isso em https://x.co/abc @usuario incrível");
        assert!(!out.contains("https"));
        assert!(!out.split(' ').any(|t| t == "usuario"));
        assert_eq!(out, "veja incrvel");
    }

    #[test]
    fn deterministic() {
        let n = Normalizer::new();
        let input = "A Campus Party é um evento incrível! @cpweekend #piaui";
        assert_eq!(n.normalize(input), n.normalize(input));
    }

    #[test]
    fn idempotent_on_normalized_text() {
        let n = Normalizer::new();
        let once = n.normalize("Adorei o evento, foi maravilhoso demais!");
        let twice = n.normalize(&once);
        assert_eq!(once, twice);
    }
}
