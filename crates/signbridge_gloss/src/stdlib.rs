//! Standard English vocabulary.
//!
//! Contains the default word tables for translating English sentences into
//! sign-language gloss. Apostrophes split words during tokenization, so
//! contraction stems ("DON" from "DON'T") are listed with the negations and
//! the dangling "T"/"S" with the stop words.

use crate::lexicon::Lexicon;

/// Articles, copulas, auxiliaries, and other function words with no sign.
pub const STOP_WORDS: &[&str] = &[
    // Articles
    "A", "AN", "THE",
    // Copulas
    "IS", "AM", "ARE", "WAS", "WERE", "BE", "BEEN", "BEING",
    // Auxiliaries
    "DO", "DOES", "DID", "WILL", "SHALL", "WOULD", "SHOULD", "COULD", "MAY", "MIGHT", "MUST",
    // Particles and prepositions without a sign of their own
    "TO", "OF", "AT", "IN", "ON", "FOR", "AND", "BUT", "SO", "THAT", "THIS", "THESE", "THOSE",
    "VERY", "JUST", "PLEASE",
    // Contraction tails
    "T", "S", "LL", "RE", "VE", "D", "M",
];

/// Temporal references, topicalized to the front of the gloss.
pub const TIME_WORDS: &[&str] = &[
    "TODAY", "TOMORROW", "YESTERDAY", "NOW", "LATER", "SOON", "MORNING", "AFTERNOON", "EVENING",
    "NIGHT", "TONIGHT", "WEEK", "WEEKEND", "MONTH", "YEAR", "ALWAYS", "SOMETIMES", "BEFORE",
    "AFTER", "ALREADY", "MONDAY", "TUESDAY", "WEDNESDAY", "THURSDAY", "FRIDAY", "SATURDAY",
    "SUNDAY",
];

/// Negation synonyms, all normalized to [`NEGATION_MARKER`].
pub const NEGATION_WORDS: &[&str] = &[
    "NOT", "NO", "NEVER", "NONE", "NOTHING", "NOBODY", "NOWHERE", "CANNOT", "DONT", "DOESNT",
    "DIDNT", "WONT", "ISNT", "ARENT", "WASNT", "WERENT", "CANT", "NEITHER", "NOR",
    // Contraction stems
    "DON", "DOESN", "DIDN", "WON", "ISN", "AREN", "WASN", "WEREN", "HAVEN", "HASN", "HADN",
    "COULDN", "SHOULDN", "WOULDN", "MUSTN",
];

/// Gloss emitted for every negation word.
pub const NEGATION_MARKER: &str = "NO";

/// Question words, moved to the end of the gloss.
pub const QUESTION_WORDS: &[&str] = &[
    "WHAT", "WHERE", "WHEN", "WHY", "WHO", "HOW", "WHICH", "WHOSE", "WHOM",
];

/// Subject pronouns.
pub const SUBJECT_PRONOUNS: &[&str] = &["I", "YOU", "HE", "SHE", "WE", "THEY", "IT"];

/// Canonical verb forms.
pub const VERBS: &[&str] = &[
    "GO", "COME", "EAT", "DRINK", "LOVE", "LIKE", "WANT", "NEED", "HAVE", "SEE", "LOOK", "WATCH",
    "HELP", "KNOW", "THINK", "LEARN", "STUDY", "WORK", "PLAY", "READ", "WRITE", "SLEEP", "MEET",
    "GIVE", "TAKE", "MAKE", "BUY", "SAY", "TELL", "RUN", "WALK", "SIT", "STAND", "FEEL",
    "UNDERSTAND", "CAN", "FINISH", "STOP", "START", "CALL", "LIVE", "TEACH", "SIGN", "DRIVE",
    "COOK", "OPEN", "CLOSE", "WAIT", "REMEMBER", "FORGET",
];

/// Inflected and irregular verb forms mapped to their canonical verb.
pub const IRREGULAR_VERBS: &[(&str, &str)] = &[
    ("GOING", "GO"), ("GOES", "GO"), ("WENT", "GO"), ("GONE", "GO"),
    ("COMING", "COME"), ("COMES", "COME"), ("CAME", "COME"),
    ("EATING", "EAT"), ("EATS", "EAT"), ("ATE", "EAT"), ("EATEN", "EAT"),
    ("DRINKING", "DRINK"), ("DRINKS", "DRINK"), ("DRANK", "DRINK"), ("DRUNK", "DRINK"),
    ("LOVING", "LOVE"), ("LOVES", "LOVE"), ("LOVED", "LOVE"),
    ("LIKING", "LIKE"), ("LIKES", "LIKE"), ("LIKED", "LIKE"),
    ("WANTING", "WANT"), ("WANTS", "WANT"), ("WANTED", "WANT"),
    ("NEEDING", "NEED"), ("NEEDS", "NEED"), ("NEEDED", "NEED"),
    ("HAVING", "HAVE"), ("HAS", "HAVE"), ("HAD", "HAVE"),
    ("SEEING", "SEE"), ("SEES", "SEE"), ("SAW", "SEE"), ("SEEN", "SEE"),
    ("LOOKING", "LOOK"), ("LOOKS", "LOOK"), ("LOOKED", "LOOK"),
    ("WATCHING", "WATCH"), ("WATCHES", "WATCH"), ("WATCHED", "WATCH"),
    ("HELPING", "HELP"), ("HELPS", "HELP"), ("HELPED", "HELP"),
    ("KNOWING", "KNOW"), ("KNOWS", "KNOW"), ("KNEW", "KNOW"), ("KNOWN", "KNOW"),
    ("THINKING", "THINK"), ("THINKS", "THINK"), ("THOUGHT", "THINK"),
    ("LEARNING", "LEARN"), ("LEARNS", "LEARN"), ("LEARNED", "LEARN"), ("LEARNT", "LEARN"),
    ("STUDYING", "STUDY"), ("STUDIES", "STUDY"), ("STUDIED", "STUDY"),
    ("WORKING", "WORK"), ("WORKS", "WORK"), ("WORKED", "WORK"),
    ("PLAYING", "PLAY"), ("PLAYS", "PLAY"), ("PLAYED", "PLAY"),
    ("READING", "READ"), ("READS", "READ"),
    ("WRITING", "WRITE"), ("WRITES", "WRITE"), ("WROTE", "WRITE"), ("WRITTEN", "WRITE"),
    ("SLEEPING", "SLEEP"), ("SLEEPS", "SLEEP"), ("SLEPT", "SLEEP"),
    ("MEETING", "MEET"), ("MEETS", "MEET"), ("MET", "MEET"),
    ("GIVING", "GIVE"), ("GIVES", "GIVE"), ("GAVE", "GIVE"), ("GIVEN", "GIVE"),
    ("TAKING", "TAKE"), ("TAKES", "TAKE"), ("TOOK", "TAKE"), ("TAKEN", "TAKE"),
    ("MAKING", "MAKE"), ("MAKES", "MAKE"), ("MADE", "MAKE"),
    ("BUYING", "BUY"), ("BUYS", "BUY"), ("BOUGHT", "BUY"),
    ("SAYING", "SAY"), ("SAYS", "SAY"), ("SAID", "SAY"),
    ("TELLING", "TELL"), ("TELLS", "TELL"), ("TOLD", "TELL"),
    ("RUNNING", "RUN"), ("RUNS", "RUN"), ("RAN", "RUN"),
    ("WALKING", "WALK"), ("WALKS", "WALK"), ("WALKED", "WALK"),
    ("SITTING", "SIT"), ("SITS", "SIT"), ("SAT", "SIT"),
    ("STANDING", "STAND"), ("STANDS", "STAND"), ("STOOD", "STAND"),
    ("FEELING", "FEEL"), ("FEELS", "FEEL"), ("FELT", "FEEL"),
    ("UNDERSTANDING", "UNDERSTAND"), ("UNDERSTANDS", "UNDERSTAND"), ("UNDERSTOOD", "UNDERSTAND"),
    ("FINISHING", "FINISH"), ("FINISHES", "FINISH"), ("FINISHED", "FINISH"),
    ("STOPPING", "STOP"), ("STOPS", "STOP"), ("STOPPED", "STOP"),
    ("STARTING", "START"), ("STARTS", "START"), ("STARTED", "START"),
    ("CALLING", "CALL"), ("CALLS", "CALL"), ("CALLED", "CALL"),
    ("LIVING", "LIVE"), ("LIVES", "LIVE"), ("LIVED", "LIVE"),
    ("TEACHING", "TEACH"), ("TEACHES", "TEACH"), ("TAUGHT", "TEACH"),
    ("SIGNING", "SIGN"), ("SIGNS", "SIGN"), ("SIGNED", "SIGN"),
    ("DRIVING", "DRIVE"), ("DRIVES", "DRIVE"), ("DROVE", "DRIVE"), ("DRIVEN", "DRIVE"),
    ("COOKING", "COOK"), ("COOKS", "COOK"), ("COOKED", "COOK"),
    ("OPENING", "OPEN"), ("OPENS", "OPEN"), ("OPENED", "OPEN"),
    ("CLOSING", "CLOSE"), ("CLOSES", "CLOSE"), ("CLOSED", "CLOSE"),
    ("WAITING", "WAIT"), ("WAITS", "WAIT"), ("WAITED", "WAIT"),
    ("REMEMBERING", "REMEMBER"), ("REMEMBERS", "REMEMBER"), ("REMEMBERED", "REMEMBER"),
    ("FORGETTING", "FORGET"), ("FORGETS", "FORGET"), ("FORGOT", "FORGET"), ("FORGOTTEN", "FORGET"),
];

/// Known non-verb glosses.
pub const GLOSSES: &[&str] = &[
    // Greetings and courtesy
    "HELLO", "GOODBYE", "THANK", "THANKS", "SORRY", "WELCOME", "YES",
    // Qualities
    "GOOD", "BAD", "HAPPY", "SAD", "TIRED", "HUNGRY", "THIRSTY", "SICK", "FINE", "BIG", "SMALL",
    "HOT", "COLD", "NEW", "OLD", "BEAUTIFUL",
    // People
    "ME", "MY", "YOUR", "HIS", "HER", "OUR", "THEIR", "HIM", "US", "THEM", "FRIEND", "FAMILY",
    "MOTHER", "FATHER", "BROTHER", "SISTER", "TEACHER", "STUDENT", "DOCTOR", "BABY", "NAME",
    // Places
    "SCHOOL", "HOME", "HOUSE", "HOSPITAL", "STORE", "OFFICE", "CITY", "PARK", "RESTAURANT",
    // Things
    "FOOD", "WATER", "COFFEE", "TEA", "BOOK", "CAR", "BUS", "PHONE", "MONEY", "COMPUTER",
    "MOVIE", "GAME", "CLASS", "LANGUAGE", "BATHROOM", "TIME",
];

/// File extension of the standard motion clips.
pub const CLIP_EXTENSION: &str = "bvh";

/// Builds the standard English lexicon from the tables in this module.
#[must_use]
pub fn standard_lexicon() -> Lexicon {
    let mut lexicon = Lexicon::new().with_negation_marker(NEGATION_MARKER);
    for word in STOP_WORDS {
        lexicon.register_stop_word(word);
    }
    for word in TIME_WORDS {
        lexicon.register_time_word(word);
    }
    for word in NEGATION_WORDS {
        lexicon.register_negation_word(word);
    }
    for word in QUESTION_WORDS {
        lexicon.register_question_word(word);
    }
    for word in SUBJECT_PRONOUNS {
        lexicon.register_subject_pronoun(word);
    }
    for word in VERBS {
        lexicon.register_verb(word);
    }
    for (variant, canonical) in IRREGULAR_VERBS {
        lexicon.register_irregular_verb(variant, canonical);
    }
    for word in GLOSSES {
        lexicon.register_gloss(word);
    }
    lexicon
}
