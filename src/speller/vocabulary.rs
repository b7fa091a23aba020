//! Seed word lists for the bundled dictionary corrector.
//!
//! Three tiers: sig-domain terms (dosing verbs, time units, Latin codes),
//! drug names, and a core of general English. Ties between equally close
//! candidates resolve toward the higher tier, so "tiems" lands on "times"
//! even when a general word is just as close.

/// Drug and medical term names. Sorted for binary search; lowercase.
pub const DRUG_TERMS: &[&str] = &[
    "acetaminophen", "advil", "albumin", "albuterol", "allopurinol",
    "amlodipine", "amoxicillin", "amylase", "arrhythmia", "aspirin",
    "atorvastatin", "azithromycin", "benadryl", "bicarbonate", "bilirubin",
    "bisoprolol", "bradycardia", "budesonide", "calcium", "carbamazepine",
    "carvedilol", "chloride", "cholesterol", "ciprofloxacin", "citalopram",
    "claritin", "clopidogrel", "codeine", "colchicine", "cortisol",
    "creatinine", "diclofenac", "digoxin", "duloxetine", "enalapril",
    "erythrocytes", "escitalopram", "estradiol", "ferritin", "fibrinogen",
    "finasteride", "fluconazole", "fluoxetine", "fluticasone", "furosemide",
    "gabapentin", "glucose", "hematocrit", "hemoglobin", "hepatitis",
    "hydrochlorothiazide", "hypertension", "hypotension", "hypothyroidism",
    "ibuprofen", "insulin", "leukocytes", "levetiracetam", "levothyroxine",
    "lipase", "lisinopril", "loratadine", "losartan", "magnesium",
    "melatonin", "metformin", "methotrexate", "metoprolol", "montelukast",
    "morphine", "naproxen", "nitrofurantoin", "olanzapine", "omeprazole",
    "pantoprazole", "paracetamol", "perindopril", "phenytoin", "phosphate",
    "potassium", "prednisolone", "prednisone", "procalcitonin",
    "progesterone", "prolactin", "quetiapine", "ramipril", "risperidone",
    "rivaroxaban", "sertraline", "simvastatin", "sodium", "spironolactone",
    "sulfasalazine", "tachycardia", "tamsulosin", "testosterone",
    "thrombocytes", "thrombosis", "tiotropium", "tramadol", "transferrin",
    "triglycerides", "trimethoprim", "troponin", "tylenol", "valproate",
    "venlafaxine", "warfarin", "zyrtec",
];

/// Sig-domain vocabulary: dosing verbs, time words, route words, Latin
/// frequency codes, number words. Lowercase.
pub const SIG_TERMS: &[&str] = &[
    "a", "about", "ac", "affected", "after", "afternoon", "an", "and",
    "anxiety", "apply", "area", "areas", "as", "at", "bed", "bedtime",
    "before", "bid", "biw", "breakfast", "by", "chew", "cough", "daily",
    "day", "days", "dinner", "directed", "dissolve", "dose", "doses",
    "each", "ear", "ears", "eight", "evening", "evenings", "every", "eye",
    "eyes", "fever", "five", "food", "for", "four", "from", "full", "g",
    "glass", "gram", "grams", "half", "hour", "hourly", "hours", "hs",
    "if", "in", "inhale", "inject", "insert", "instill", "into", "it",
    "iu", "l", "left", "lunch", "mcg", "meal", "meals", "meq", "mg",
    "microgram", "micrograms", "milk", "milligram", "milligrams",
    "milliliter", "milliliters", "ml", "month", "monthly", "months",
    "more", "morning", "mornings", "mouth", "nausea", "need", "needed",
    "night", "nightly", "nights", "nine", "noon", "nostril", "nostrils",
    "not", "of", "on", "once", "one", "or", "orally", "other", "pain",
    "pc", "per", "place", "po", "prn", "qam", "qd", "qhs", "qid", "qiw",
    "qm", "qod", "qpm", "qw", "right", "rinse", "seven", "shake", "six",
    "skin", "sleep", "swallow", "swish", "tab", "tabs", "take", "taken",
    "takes", "taking", "ten", "than", "that", "the", "then", "this",
    "three", "tid", "time", "times", "tiw", "to", "today", "tomorrow",
    "tongue", "twice", "two", "under", "until", "up", "use", "water",
    "week", "weekly", "weeks", "well", "with", "without", "year",
    "yearly", "years",
];

/// Core general-English words so ordinary prose is recognized rather than
/// "corrected" into domain terms. Lowercase.
pub const GENERAL_TERMS: &[&str] = &[
    "able", "above", "act", "add", "again", "against", "ago", "ahead",
    "all", "almost", "alone", "along", "already", "also", "although",
    "always", "am", "among", "amount", "another", "answer", "any",
    "anyone", "anything", "are", "around", "ask", "away", "back", "bad",
    "based", "be", "became", "because", "become", "been", "began",
    "begin", "behind", "being", "below", "best", "better", "between",
    "big", "body", "book", "both", "bring", "brought", "but", "call",
    "called", "came", "can", "cannot", "care", "case", "certain",
    "change", "child", "children", "city", "clear", "close", "cold",
    "come", "common", "could", "country", "course", "cut", "did",
    "different", "do", "does", "done", "down", "during", "early", "end",
    "enough", "even", "ever", "example", "face", "fact", "family", "far",
    "feel", "feet", "felt", "few", "final", "find", "fine", "first",
    "follow", "found", "front", "gave", "general", "get", "give",
    "given", "go", "going", "gone", "good", "got", "great", "group",
    "grow", "had", "hand", "happen", "hard", "has", "have", "he", "head",
    "health", "hear", "heard", "held", "help", "her", "here", "high",
    "him", "his", "hold", "home", "hot", "house", "how", "however", "i",
    "idea", "important", "inside", "instead", "its", "just", "keep",
    "kept", "kind", "knew", "know", "known", "large", "last", "later",
    "learn", "least", "leave", "less", "let", "life", "light", "like",
    "line", "little", "live", "long", "look", "low", "made", "make",
    "many", "may", "me", "mean", "might", "mind", "miss", "moment",
    "money", "most", "move", "much", "must", "my", "name", "near",
    "never", "new", "next", "no", "nothing", "now", "number", "often",
    "old", "only", "open", "order", "our", "out", "over", "own", "part",
    "people", "perhaps", "person", "point", "possible", "power",
    "present", "problem", "public", "put", "question", "quite", "rather",
    "read", "real", "really", "reason", "rest", "result", "return",
    "room", "said", "same", "saw", "say", "school", "second", "see",
    "seem", "seen", "sent", "set", "she", "should", "show", "side",
    "simple", "since", "small", "so", "some", "something", "sometimes",
    "soon", "sound", "state", "still", "story", "street", "strong",
    "such", "sure", "system", "tell", "their", "them", "there", "these",
    "they", "thing", "think", "those", "though", "thought", "through",
    "thus", "together", "told", "too", "took", "toward", "turn",
    "turned", "upon", "us", "used", "very", "want", "was", "way", "we",
    "went", "were", "what", "when", "where", "which", "while", "who",
    "whole", "whose", "why", "will", "word", "words", "work", "world",
    "would", "write", "yes", "yet", "you", "young", "your",
];

/// Words that shadow sig vocabulary when a larger dictionary is merged in
/// ("talbot" outranks "tablet" for the typo "talbet"). Removed from the
/// dictionary whenever present.
pub const CORRECTION_EXCLUSIONS: &[&str] = &["talbot"];
