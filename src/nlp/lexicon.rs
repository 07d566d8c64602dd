//! Closed-class word lists and light verb morphology for the shallow tagger.

use std::collections::{HashMap, HashSet};

use once_cell::sync::Lazy;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum VerbForm {
    Base,
    ThirdPerson,
    /// Any `-ed` form or irregular past; past tense and participle share it.
    PastOrParticiple,
    Participle,
    Gerund,
}

impl VerbForm {
    /// Forms that can stand in the same coordination slot.
    pub fn agrees_with(self, other: VerbForm) -> bool {
        use VerbForm::*;
        match (self, other) {
            (PastOrParticiple | Participle, PastOrParticiple | Participle) => true,
            _ => self == other,
        }
    }
}

/// Lexical class assigned before context is considered.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum LexClass {
    Punct,
    Sym,
    Num,
    Det,
    Pron,
    Adp,
    Cconj,
    Sconj,
    That,
    To,
    Modal,
    Be,
    Have,
    Do,
    Neg,
    Adv,
    Adj,
    Open,
}

pub struct Lexicon {
    determiners: HashSet<&'static str>,
    pronouns: HashSet<&'static str>,
    subject_pronouns: HashSet<&'static str>,
    relative_pronouns: HashSet<&'static str>,
    adpositions: HashSet<&'static str>,
    clause_adpositions: HashSet<&'static str>,
    coordinators: HashSet<&'static str>,
    subordinators: HashSet<&'static str>,
    complementizers: HashSet<&'static str>,
    modals: HashSet<&'static str>,
    be_forms: HashSet<&'static str>,
    have_forms: HashSet<&'static str>,
    do_forms: HashSet<&'static str>,
    negations: HashSet<&'static str>,
    adverbs: HashSet<&'static str>,
    adjectives: HashSet<&'static str>,
    number_words: HashSet<&'static str>,
    ly_nouns: HashSet<&'static str>,
    ed_nouns: HashSet<&'static str>,
    abbreviations: HashSet<&'static str>,
    verb_stems: HashSet<&'static str>,
    irregular_past: HashMap<&'static str, &'static str>,
    irregular_participles: HashMap<&'static str, &'static str>,
}

static LEXICON: Lazy<Lexicon> = Lazy::new(Lexicon::build);

pub fn lexicon() -> &'static Lexicon {
    &LEXICON
}

fn set(words: &[&'static str]) -> HashSet<&'static str> {
    words.iter().copied().collect()
}

impl Lexicon {
    fn build() -> Self {
        // (base, past, participle)
        let irregular: &[(&str, &str, &str)] = &[
            ("become", "became", "become"),
            ("begin", "began", "begun"),
            ("break", "broke", "broken"),
            ("bring", "brought", "brought"),
            ("build", "built", "built"),
            ("buy", "bought", "bought"),
            ("choose", "chose", "chosen"),
            ("come", "came", "come"),
            ("cut", "cut", "cut"),
            ("do", "did", "done"),
            ("draw", "drew", "drawn"),
            ("drive", "drove", "driven"),
            ("feed", "fed", "fed"),
            ("feel", "felt", "felt"),
            ("find", "found", "found"),
            ("fly", "flew", "flown"),
            ("forget", "forgot", "forgotten"),
            ("freeze", "froze", "frozen"),
            ("get", "got", "gotten"),
            ("give", "gave", "given"),
            ("go", "went", "gone"),
            ("grow", "grew", "grown"),
            ("hide", "hid", "hidden"),
            ("hit", "hit", "hit"),
            ("hold", "held", "held"),
            ("keep", "kept", "kept"),
            ("know", "knew", "known"),
            ("lay", "laid", "laid"),
            ("lead", "led", "led"),
            ("leave", "left", "left"),
            ("let", "let", "let"),
            ("lose", "lost", "lost"),
            ("make", "made", "made"),
            ("mean", "meant", "meant"),
            ("meet", "met", "met"),
            ("pay", "paid", "paid"),
            ("put", "put", "put"),
            ("read", "read", "read"),
            ("rebuild", "rebuilt", "rebuilt"),
            ("rewrite", "rewrote", "rewritten"),
            ("ride", "rode", "ridden"),
            ("run", "ran", "run"),
            ("see", "saw", "seen"),
            ("seek", "sought", "sought"),
            ("sell", "sold", "sold"),
            ("send", "sent", "sent"),
            ("set", "set", "set"),
            ("show", "showed", "shown"),
            ("shut", "shut", "shut"),
            ("speak", "spoke", "spoken"),
            ("spend", "spent", "spent"),
            ("split", "split", "split"),
            ("take", "took", "taken"),
            ("tell", "told", "told"),
            ("throw", "threw", "thrown"),
            ("understand", "understood", "understood"),
            ("undergo", "underwent", "undergone"),
            ("wear", "wore", "worn"),
            ("withstand", "withstood", "withstood"),
            ("write", "wrote", "written"),
        ];

        let mut verb_stems = set(VERB_STEMS);
        let mut irregular_past = HashMap::new();
        let mut irregular_participles = HashMap::new();
        for (base, past, participle) in irregular {
            verb_stems.insert(*base);
            irregular_past.insert(*past, *base);
            irregular_participles.insert(*participle, *base);
        }

        Self {
            determiners: set(&[
                "a", "an", "the", "this", "these", "those", "each", "every", "all", "any",
                "some", "no", "both", "either", "neither", "another", "such", "my", "your",
                "his", "its", "our", "their", "whose",
            ]),
            pronouns: set(&[
                "i", "me", "you", "he", "him", "she", "her", "it", "we", "us", "they", "them",
                "myself", "itself", "themselves", "ourselves", "himself", "herself",
                "someone", "anyone", "everyone", "nobody", "something", "anything",
                "everything", "nothing", "who", "whom", "which", "what", "whoever",
            ]),
            subject_pronouns: set(&[
                "i", "you", "he", "she", "it", "we", "they", "who", "which", "that",
            ]),
            relative_pronouns: set(&["that", "which", "who"]),
            adpositions: set(&[
                "of", "in", "on", "at", "by", "for", "with", "within", "without", "from",
                "into", "onto", "upon", "over", "under", "above", "below", "between", "among",
                "through", "during", "before", "after", "since", "until", "across", "against",
                "along", "around", "about", "beyond", "per", "via", "than", "toward",
                "towards", "throughout", "inside", "outside", "except", "despite", "like",
                "near", "off", "out", "up", "down", "behind", "beneath", "beside", "besides",
                "as", "prior",
            ]),
            clause_adpositions: set(&["before", "after", "since", "until"]),
            coordinators: set(&["and", "or", "but", "nor"]),
            subordinators: set(&[
                "if", "when", "whenever", "while", "whereas", "unless", "although", "though",
                "because", "whether", "where", "wherever", "once", "so",
            ]),
            complementizers: set(&["that", "whether"]),
            modals: set(&[
                "shall", "will", "must", "should", "may", "might", "can", "could", "would",
                "cannot", "can't", "won't", "shouldn't", "wouldn't", "couldn't", "mustn't",
                "shan't",
            ]),
            be_forms: set(&[
                "be", "is", "are", "was", "were", "been", "being", "am", "isn't", "aren't",
                "wasn't", "weren't",
            ]),
            have_forms: set(&["have", "has", "had", "having", "hasn't", "haven't", "hadn't"]),
            do_forms: set(&["do", "does", "did", "doesn't", "don't", "didn't"]),
            negations: set(&["not", "n't", "never"]),
            adverbs: set(&[
                "also", "always", "only", "very", "too", "quite", "just", "still", "already",
                "then", "again", "often", "here", "there", "now", "soon", "even", "however",
                "therefore", "thus", "instead", "otherwise", "almost", "nearly", "least",
                "most", "more", "less", "well", "ever", "hence", "further", "furthermore",
                "moreover", "meanwhile", "afterwards", "beforehand", "possibly", "approximately",
                "etc",
            ]),
            adjectives: set(&[
                "low", "high", "fast", "slow", "long", "short", "new", "old", "good", "bad",
                "best", "better", "worse", "worst", "large", "small", "big", "strong", "weak",
                "robust", "efficient", "effective", "seamless", "easy", "hard", "simple",
                "complex", "clear", "safe", "secure", "available", "possible", "impossible",
                "able", "unable", "ready", "full", "empty", "free", "open", "closed", "valid",
                "invalid", "current", "previous", "next", "same", "different", "main",
                "minimum", "maximum", "total", "certain", "critical", "normal", "abnormal",
                "appropriate", "sufficient", "adequate", "reliable", "accurate", "real",
                "due", "several", "various", "many", "few", "much", "other", "additional",
                "multiple", "single", "specific", "general", "visible", "audible",
                "redundant", "automatic", "manual", "operational", "functional", "minimal",
                "maximal", "optimal", "friendly", "intuitive", "responsive", "necessary",
                "primary", "secondary", "external", "internal", "local", "remote", "active",
                "inactive", "wireless", "unauthorized", "authorized", "daily", "weekly",
                "monthly", "early", "late", "hot", "cold", "warm", "dry", "wet", "quick",
                "stable", "unstable", "correct", "incorrect", "proper", "standard",
            ]),
            number_words: set(&[
                "zero", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
                "eleven", "twelve", "twenty", "thirty", "fifty", "hundred", "thousand",
                "million",
            ]),
            ly_nouns: set(&[
                "assembly", "anomaly", "family", "ally", "italy", "rally", "supply", "reply",
                "poly", "butterfly",
            ]),
            ed_nouns: set(&[
                "speed", "need", "feed", "seed", "red", "bed", "hundred", "shed", "bleed",
                "embed", "proceed", "exceed", "succeed", "breed", "weed", "shred",
            ]),
            abbreviations: set(&["etc", "e.g", "i.e", "approx", "vs", "no", "fig", "ref", "sec"]),
            verb_stems,
            irregular_past,
            irregular_participles,
        }
    }

    /// Class of a lower-cased token before context is considered.
    pub fn classify(&self, lower: &str) -> LexClass {
        if lower.chars().all(|ch| !ch.is_alphanumeric()) {
            return if lower.chars().all(is_symbol) {
                LexClass::Sym
            } else {
                LexClass::Punct
            };
        }
        if lower.chars().next().is_some_and(|ch| ch.is_ascii_digit())
            || self.number_words.contains(lower)
        {
            return LexClass::Num;
        }
        if lower == "that" {
            return LexClass::That;
        }
        if lower == "to" {
            return LexClass::To;
        }
        if self.modals.contains(lower) {
            return LexClass::Modal;
        }
        if self.be_forms.contains(lower) {
            return LexClass::Be;
        }
        if self.have_forms.contains(lower) {
            return LexClass::Have;
        }
        if self.do_forms.contains(lower) {
            return LexClass::Do;
        }
        if self.negations.contains(lower) {
            return LexClass::Neg;
        }
        if self.coordinators.contains(lower) {
            return LexClass::Cconj;
        }
        if self.subordinators.contains(lower) {
            return LexClass::Sconj;
        }
        if self.determiners.contains(lower) {
            return LexClass::Det;
        }
        if self.pronouns.contains(lower) {
            return LexClass::Pron;
        }
        if self.adpositions.contains(lower) {
            return LexClass::Adp;
        }
        if self.adverbs.contains(lower) {
            return LexClass::Adv;
        }
        if self.adjectives.contains(lower) {
            return LexClass::Adj;
        }
        if lower.ends_with("ly")
            && lower.len() > 4
            && !self.ly_nouns.contains(lower)
            && self.analyze_verb(lower).is_none()
        {
            return LexClass::Adv;
        }
        if has_adjective_suffix(lower) && self.analyze_verb(lower).is_none() {
            return LexClass::Adj;
        }
        LexClass::Open
    }

    /// Lemma and form of a known verb, if `lower` is an inflection of one.
    pub fn analyze_verb(&self, lower: &str) -> Option<(&'static str, VerbForm)> {
        if let Some(stem) = self.verb_stems.get(lower) {
            return Some((*stem, VerbForm::Base));
        }
        if let Some(base) = self.irregular_participles.get(lower) {
            return Some((*base, VerbForm::Participle));
        }
        if let Some(base) = self.irregular_past.get(lower) {
            return Some((*base, VerbForm::PastOrParticiple));
        }
        if let Some(stem) = lower.strip_suffix("ing") {
            return self.find_stem(stem, VerbForm::Gerund);
        }
        if self.ed_nouns.contains(lower) {
            return None;
        }
        if let Some(stem) = lower.strip_suffix("ied") {
            return self.lookup(&format!("{stem}y"), VerbForm::PastOrParticiple);
        }
        if let Some(stem) = lower.strip_suffix("ed") {
            return self
                .find_stem(stem, VerbForm::PastOrParticiple)
                .or_else(|| self.lookup(&format!("{stem}e"), VerbForm::PastOrParticiple));
        }
        if let Some(stem) = lower.strip_suffix("ies") {
            return self.lookup(&format!("{stem}y"), VerbForm::ThirdPerson);
        }
        if let Some(stem) = lower.strip_suffix("es") {
            if let Some(found) = self.lookup(stem, VerbForm::ThirdPerson) {
                return Some(found);
            }
        }
        if let Some(stem) = lower.strip_suffix('s') {
            if !stem.ends_with('s') {
                return self.lookup(stem, VerbForm::ThirdPerson);
            }
        }
        None
    }

    /// `-ed` or irregular participle shape, known verb or not.
    pub fn looks_like_participle(&self, lower: &str) -> bool {
        if self.irregular_participles.contains_key(lower) {
            return true;
        }
        lower.len() > 4 && lower.ends_with("ed") && !self.ed_nouns.contains(lower)
    }

    pub fn looks_like_gerund(&self, lower: &str) -> bool {
        lower.len() > 5 && lower.ends_with("ing")
    }

    pub fn is_verb_stem(&self, lower: &str) -> bool {
        self.verb_stems.contains(lower)
    }

    pub fn is_subject_pronoun(&self, lower: &str) -> bool {
        self.subject_pronouns.contains(lower)
    }

    pub fn is_relative_pronoun(&self, lower: &str) -> bool {
        self.relative_pronouns.contains(lower)
    }

    pub fn is_clause_adposition(&self, lower: &str) -> bool {
        self.clause_adpositions.contains(lower)
    }

    pub fn is_complementizer(&self, lower: &str) -> bool {
        self.complementizers.contains(lower)
    }

    pub fn is_abbreviation(&self, lower: &str) -> bool {
        self.abbreviations.contains(lower)
    }

    fn lookup(&self, candidate: &str, form: VerbForm) -> Option<(&'static str, VerbForm)> {
        self.verb_stems.get(candidate).map(|stem| (*stem, form))
    }

    /// Tries the bare stem, the stem with a silent `e`, and an undoubled consonant.
    fn find_stem(&self, stem: &str, form: VerbForm) -> Option<(&'static str, VerbForm)> {
        if stem.len() < 2 {
            return None;
        }
        if let Some(found) = self.lookup(stem, form) {
            return Some(found);
        }
        if let Some(found) = self.lookup(&format!("{stem}e"), form) {
            return Some(found);
        }
        let mut chars = stem.chars().rev();
        match (chars.next(), chars.next()) {
            (Some(last), Some(previous)) if last == previous => {
                self.lookup(&stem[..stem.len() - last.len_utf8()], form)
            }
            _ => None,
        }
    }
}

fn is_symbol(ch: char) -> bool {
    matches!(ch, '$' | '%' | '+' | '=' | '<' | '>' | '/' | '&' | '#' | '@' | '°' | '±' | '~')
}

fn has_adjective_suffix(lower: &str) -> bool {
    const SUFFIXES: &[&str] = &["able", "ible", "ous", "ful", "ive", "less", "ic", "ical"];
    lower.len() > 5 && SUFFIXES.iter().any(|suffix| lower.ends_with(suffix))
}

const VERB_STEMS: &[&str] = &[
    "accept", "access", "accelerate", "achieve", "acknowledge", "activate", "adapt", "add",
    "adjust", "alert", "allow", "analyze", "analyse", "apply", "approve", "archive", "arm",
    "assign", "attempt", "authenticate", "authorize", "back", "beep", "blink", "block",
    "boot", "brake", "broadcast", "buffer", "calculate", "calibrate", "call", "cancel",
    "capture", "change", "charge", "check", "clear", "click", "close", "collect", "combine",
    "communicate", "compare", "compile", "complete", "comply", "compress", "compute",
    "configure", "confirm", "connect", "consume", "contain", "continue", "control",
    "convert", "copy", "correct", "create", "deactivate", "decode", "decrypt", "define",
    "delete", "deliver", "deny", "deploy", "detect", "determine", "disable", "disarm",
    "discharge", "disconnect", "display", "distribute", "download", "drop", "edit",
    "eject", "enable", "encode", "encrypt", "end", "enforce", "ensure", "enter", "erase",
    "estimate", "evaluate", "exceed", "exchange", "execute", "exit", "expire", "export",
    "extract", "fail", "fetch", "filter", "flag", "flash", "follow", "format", "generate",
    "grant", "guide", "halt", "handle", "help", "hover", "identify", "ignore",
    "illuminate", "implement", "import", "include", "increase", "decrease", "indicate",
    "inform", "initiate", "initialize", "input", "insert", "inspect", "install",
    "integrate", "interrupt", "invoke", "isolate", "issue", "join", "land", "launch",
    "limit", "link", "list", "listen", "load", "locate", "lock", "log", "login", "logout",
    "maintain", "manage", "map", "mark", "measure", "merge", "migrate", "minimize",
    "maximize", "modify", "monitor", "mount", "move", "mute", "navigate", "need", "notify",
    "obtain", "occur", "open", "operate", "optimize", "output", "overwrite", "parse",
    "pass", "pause", "perform", "permit", "persist", "place", "play", "plot", "poll",
    "power", "predict", "press", "prevent", "print", "prioritize", "process", "produce",
    "prompt", "protect", "provide", "publish", "pump", "purge", "query", "queue", "raise",
    "reach", "receive", "record", "recover", "reduce", "refresh", "register", "reject",
    "release", "reload", "remain", "remove", "render", "repair", "repeat", "replace",
    "replicate", "report", "request", "require", "reset", "resolve", "respond", "restart",
    "restore", "restrict", "resume", "retain", "retrieve", "retry", "return", "review",
    "rotate", "route", "save", "scan", "schedule", "search", "secure", "select", "sense",
    "shutdown", "sign", "signal", "simulate", "sort", "sound", "specify", "start", "steer",
    "stop", "store", "stream", "submit", "supply", "support", "suspend", "switch",
    "synchronize", "terminate", "test", "track", "transfer", "transform", "transmit",
    "trigger", "turn", "undo", "unlock", "update", "upgrade", "upload", "use", "validate",
    "verify", "vibrate", "view", "wait", "warn", "work", "rely",
];
