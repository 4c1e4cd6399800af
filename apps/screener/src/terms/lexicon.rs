//! Word lists backing `LexiconTagger`. All entries are lowercase.

pub const DETERMINERS: &[&str] = &[
    "a", "an", "the", "this", "that", "these", "those", "each", "every", "either", "neither",
    "some", "any", "no", "all", "both", "another", "such", "what", "which", "whatever",
    "whichever", "my", "your", "his", "her", "its", "our", "their", "much", "many", "few",
    "several", "more", "most", "less", "least",
];

pub const PRONOUNS: &[&str] = &[
    "i", "me", "myself", "you", "yourself", "yourselves", "he", "him", "himself", "she",
    "herself", "it", "itself", "we", "us", "ourselves", "they", "them", "themselves", "who",
    "whom", "whose", "mine", "yours", "hers", "ours", "theirs", "someone", "anyone",
    "everyone", "something", "anything", "everything", "nothing", "nobody", "somebody",
    "anybody", "everybody", "one", "ones",
];

pub const ADPOSITIONS: &[&str] = &[
    "in", "on", "at", "by", "for", "with", "without", "within", "from", "to", "into", "onto",
    "of", "off", "about", "above", "across", "after", "against", "along", "among", "around",
    "before", "behind", "below", "beneath", "beside", "between", "beyond", "despite",
    "during", "except", "inside", "like", "near", "outside", "over", "per", "since",
    "through", "throughout", "toward", "towards", "under", "until", "upon", "via", "versus",
    "vs", "including", "regarding",
];

pub const CONJUNCTIONS: &[&str] = &[
    "and", "or", "but", "nor", "yet", "so", "if", "because", "although", "though", "while",
    "whereas", "unless", "whether", "than", "as", "once", "when", "where", "whenever",
    "wherever", "plus",
];

pub const AUXILIARIES: &[&str] = &[
    "be", "am", "is", "are", "was", "were", "been", "being", "have", "has", "had", "having",
    "do", "does", "did", "will", "would", "shall", "should", "can", "could", "may", "might",
    "must", "ought", "'s", "'re", "'ve", "'ll", "'d", "'m",
];

pub const PARTICLES: &[&str] = &["not", "n't", "up", "out", "down", "away", "back"];

pub const ADVERBS: &[&str] = &[
    "very", "also", "too", "just", "only", "well", "often", "always", "never", "sometimes",
    "usually", "already", "still", "even", "again", "ever", "here", "there", "now", "then",
    "soon", "together", "however", "therefore", "thus", "hence", "instead", "almost",
    "quite", "rather", "really", "how", "why", "currently", "previously", "highly",
    "strongly", "closely", "ideally", "preferably", "etc",
];

/// Common verbs of job postings and resume bullets that carry no skill signal.
/// Words that double as nouns ("design", "lead") are re-tagged by context.
pub const VERBS: &[&str] = &[
    "work", "works", "worked", "build", "builds", "built", "develop", "develops", "lead",
    "leads", "led", "manage", "manages", "managed", "design", "designs", "create", "creates",
    "created", "implement", "implements", "maintain", "maintains", "support", "supports",
    "help", "helps", "helped", "join", "joins", "own", "owns", "drive", "drives", "drove",
    "deliver", "delivers", "ensure", "ensures", "collaborate", "collaborates", "write",
    "writes", "wrote", "written", "make", "makes", "made", "use", "uses", "used", "seek",
    "seeks", "looking", "want", "wants", "need", "needs", "get", "gets", "got", "take",
    "takes", "took", "know", "knows", "knew", "include", "includes", "included", "provide",
    "provides", "provided", "improve", "improves", "reduce", "reduces", "increase",
    "increases", "launch", "launched", "ship", "shipped", "shipping", "mentor", "mentors",
    "mentored", "partner", "partners", "contribute", "contributes", "apply", "applies",
    "offer", "offers", "grow", "grows", "grew", "thrive", "thrives", "learn", "learns",
    "learned", "spearhead", "spearheaded", "architect", "architected", "deploy", "deploys",
    "scale", "scales", "run", "runs", "ran", "automate", "automates",
];

/// Adjectives that suffix rules miss.
pub const ADJECTIVES: &[&str] = &[
    "senior", "junior", "strong", "new", "good", "great", "excellent", "solid", "deep",
    "large", "small", "high", "low", "fast", "full", "remote", "hybrid", "proven",
    "hands-on", "relevant", "related", "modern", "complex", "robust", "agile", "lean",
    "cross-functional", "first", "last", "next", "top", "best", "key", "main", "major",
    "minor", "open", "real", "smart", "ideal", "required", "preferred", "familiar",
    "proficient", "fluent", "distributed", "native", "bachelor's", "master's",
];
