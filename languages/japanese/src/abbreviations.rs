use std::collections::HashMap;
use std::sync::LazyLock;

use vocab_core::preprocess::capitalize;

/// WWWJDIC dictionary codes and their long forms.
///
/// Covers verb conjugation classes, part-of-speech tags, regional dialect
/// tags, register tags and subject-field tags as listed at
/// http://nihongo.monash.edu/dictionarycodes.html
const DICTIONARY_CODES: &[(&str, &str)] = &[
    ("abbr", "abbreviation"),
    ("adj-f", "noun or verb acting prenominally"),
    ("adj-i", "I-adjective"),
    ("adj-kari", "'kari' adjective (archaic)"),
    ("adj-ku", "'ku' adjective (archaic)"),
    ("adj-na", "na-adjective"),
    ("adj-nari", "archaic/formal form of na-adjective"),
    ("adj-no", "No-adjective"),
    ("adj-pn", "pre-noun adjectival (rentaishi)"),
    ("adj-s", "special adjective"),
    ("adj-shiku", "'shiku' adjective (archaic)"),
    ("adj-t", "'taru' adjective"),
    ("adv", "adverb"),
    ("adv-n", "adverbial noun"),
    ("adv-to", "adverb taking the と particle"),
    ("an", "adjectival noun (keiyoudoushi)"),
    ("anat", "anatomical term"),
    ("arch", "archaism"),
    ("archit", "architecture term"),
    ("astron", "astronomy, etc. term"),
    ("ateji", "ateji reading"),
    ("aux", "auxiliary"),
    ("aux-adj", "auxiliary adjective"),
    ("aux-v", "auxiliary verb"),
    ("baseb", "baseball term"),
    ("biol", "biology term"),
    ("bot", "botany term"),
    ("Buddh", "Buddhist term"),
    ("bus", "business term"),
    ("c", "company name"),
    ("chem", "chemistry term"),
    ("chn", "children's language"),
    ("col", "colloquialism"),
    ("comp", "computer terminology"),
    ("conj", "conjunction"),
    ("ctr", "counter"),
    ("derog", "derogatory word or expression"),
    ("econ", "economics term"),
    ("eK", "exclusively written in kanji"),
    ("engr", "engineering term"),
    ("exp", "expression"),
    ("f", "female given name"),
    ("fam", "familiar language"),
    ("fem", "female term or language"),
    ("finc", "finance term"),
    ("food", "food term"),
    ("g", "given name, as-yet not classified by sex"),
    ("geol", "geology, etc. term"),
    ("geom", "geometry term"),
    ("gikun", "gikun (meaning) reading"),
    ("gram", "grammatical term"),
    ("h", "full (family plus given) name of a person"),
    ("hob", "Hokkaido-ben"),
    ("hon", "honorific (sonkeigo) language"),
    ("hum", "humble (kenjougo) language"),
    ("id", "idiomatic expression"),
    ("ik", "word containing irregular kana usage"),
    ("iK", "word containing irregular kanji usage"),
    ("int", "interjection"),
    ("io", "irregular okurigana usage"),
    ("iv", "irregular verb"),
    ("joc", "jocular, humorous term"),
    ("ksb", "Kansai-ben"),
    ("ktb", "Kantou-ben"),
    ("kyb", "Kyoto-ben"),
    ("kyu", "Kyuushuu-ben"),
    ("law", "law, etc. term"),
    ("ling", "linguistics terminology"),
    ("m", "male given name"),
    ("m-sl", "manga slang"),
    ("MA", "martial arts term"),
    ("male", "male term or language"),
    ("male-sl", "male slang"),
    ("math", "mathematics"),
    ("med", "medicine, etc. term"),
    ("mil", "military"),
    ("music", "music term"),
    ("n", "noun"),
    ("n-adv", "adverbial noun"),
    ("n-pr", "proper noun"),
    ("n-pref", "prefix noun"),
    ("n-suf", "suffix noun"),
    ("n-t", "temporal noun"),
    ("nab", "Nagano-ben"),
    ("neg", "negative (in a negative sentence, or with negative verb)"),
    ("neg-v", "negative verb (when used with)"),
    ("num", "numeral"),
    ("o", "organization name"),
    ("obs", "obsolete term"),
    ("obsc", "obscure term"),
    ("ok", "out-dated or obsolete kana usage"),
    ("oK", "word containing out-dated kanji"),
    ("on-mim", "onomatopoeic or mimetic word"),
    ("osb", "Osaka-ben"),
    ("p", "place-name"),
    ("physics", "physics terminology"),
    ("pn", "pronoun"),
    ("poet", "poetical term"),
    ("pol", "polite language"),
    ("pr", "product name"),
    ("pref", "prefix"),
    ("proverb", "proverb"),
    ("prt", "particle"),
    ("qv", "quod vide (see another entry)"),
    ("rare", "rare"),
    ("rkb", "Ryukyuan language"),
    ("s", "surname"),
    ("sens", "sensitive"),
    ("Shinto", "Shinto term"),
    ("sl", "slang"),
    ("sports", "sports term"),
    ("st", "station name"),
    ("suf", "suffix"),
    ("sumo", "sumo term"),
    ("thb", "Touhoku-ben"),
    ("tsb", "Tosa-ben"),
    ("tsug", "Tsugaru-ben"),
    ("u", "unclassified name"),
    ("uk", "usually written using kana alone"),
    ("uK", "usually written using kanji alone"),
    ("v-unspec", "verb unspecified"),
    ("v1", "Ichidan verb"),
    ("v2a-s", "Nidan verb (archaic)"),
    ("v2b-k", "Nidan verb (archaic)"),
    ("v2b-s", "Nidan verb (archaic)"),
    ("v2d-k", "Nidan verb (archaic)"),
    ("v2d-s", "Nidan verb (archaic)"),
    ("v2g-k", "Nidan verb (archaic)"),
    ("v2g-s", "Nidan verb (archaic)"),
    ("v2h-k", "Nidan verb (archaic)"),
    ("v2h-s", "Nidan verb (archaic)"),
    ("v2k-k", "Nidan verb (archaic)"),
    ("v2k-s", "Nidan verb (archaic)"),
    ("v2m-k", "Nidan verb (archaic)"),
    ("v2m-s", "Nidan verb (archaic)"),
    ("v2n-s", "Nidan verb (archaic)"),
    ("v2r-k", "Nidan verb (archaic)"),
    ("v2r-s", "Nidan verb (archaic)"),
    ("v2s-s", "Nidan verb (archaic)"),
    ("v2t-k", "Nidan verb (archaic)"),
    ("v2t-s", "Nidan verb (archaic)"),
    ("v2w-s", "Nidan verb (archaic)"),
    ("v2y-k", "Nidan verb (archaic)"),
    ("v2y-s", "Nidan verb (archaic)"),
    ("v2z-s", "Nidan verb (archaic)"),
    ("v4b", "Yodan verb (archaic)"),
    ("v4g", "Yodan verb (archaic)"),
    ("v4h", "Yondan verb (archaic)"),
    ("v4k", "Yodan verb (archaic)"),
    ("v4m", "Yodan verb (archaic)"),
    ("v4n", "Yodan verb (archaic)"),
    ("v4r", "Yondan verb (archaic)"),
    ("v4s", "Yodan verb (archaic)"),
    ("v4t", "Yodan verb (archaic)"),
    ("v5aru", "Godan verb"),
    ("v5b", "Godan verb"),
    ("v5g", "Godan verb"),
    ("v5k", "Godan verb"),
    ("v5k-s", "Godan verb"),
    ("v5m", "Godan verb"),
    ("v5n", "Godan verb"),
    ("v5r", "Godan verb"),
    ("v5r-i", "Godan verb"),
    ("v5s", "Godan verb"),
    ("v5t", "Godan verb"),
    ("v5u", "Godan verb"),
    ("v5u-s", "Godan verb"),
    ("v5uru", "Godan verb"),
    ("v5z", "Godan verb"),
    ("vi", "intransitive verb"),
    ("vk", "kuru verb"),
    ("vn", "irregular nu verb"),
    ("vr", "irregular ru verb, plain form ends with -ri"),
    ("vs", "Suru verb"),
    ("vs-c", "su verb - precursor to the modern suru"),
    ("vs-i", "suru verb - irregular"),
    ("vs-s", "suru verb - special class"),
    ("vt", "transitive verb"),
    ("vulg", "vulgar expression or word"),
    ("vz", "Ichidan verb - -zuru special class (alternative form of -jiru verbs)"),
    ("X", "rude or X-rated term"),
    ("zool", "zoology term"),
    ("adj-ix", "I-adjective (yoi/ii class)"),
    ("cop", "copula"),
    ("rK", "rarely-used kanji form"),
    ("rk", "rarely-used kana form"),
    ("sK", "search-only kanji form"),
    ("sk", "search-only kana form"),
    ("unc", "unclassified"),
    ("v1-s", "Ichidan verb - kureru special class"),
];

static ABBREVIATIONS: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| DICTIONARY_CODES.iter().copied().collect());

/// Long form for a dictionary code, `None` if the code is unknown
pub fn long_form(code: &str) -> Option<&'static str> {
    ABBREVIATIONS.get(code).copied()
}

/// Expand a code into its capitalized long form.
///
/// Unknown codes come back capitalized as-is.
pub fn expand(code: &str) -> String {
    match long_form(code) {
        Some(long) => capitalize(long),
        None => capitalize(code),
    }
}
