use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::Language;

/// Lexical indicator sets for one language: phrases that signal grievance or
/// action-seeking inputs, and phrases that signal a genuine request for
/// recorded information. Static configuration, immutable after first use.
pub struct LanguagePatterns {
    pub misuse: Vec<Regex>,
    pub valid_request: Vec<Regex>,
}

fn compile(patterns: &[&str]) -> Vec<Regex> {
    patterns
        .iter()
        .map(|p| Regex::new(p).expect("valid indicator regex"))
        .collect()
}

static EN_PATTERNS: Lazy<LanguagePatterns> = Lazy::new(|| LanguagePatterns {
    misuse: compile(&[
        r"(?i)\b(complaint|complain|grievance|problem|issue|help me|solve|fix)\b",
        r"(?i)\b(personal|private|individual|my case|my problem)\b",
        r"(?i)\b(why|when will|how long|give me|provide me|do this|arrange)\b",
        r"(?i)\b(action|decision|order|direct|instruct|ensure)\b",
        r"(?i)\b(salary|promotion|transfer|punishment|disciplinary)\b",
    ]),
    valid_request: compile(&[
        r"(?i)\b(information|details|records|documents|status|copy|list)\b",
        r"(?i)\b(budget|allocation|expenditure|tender|contract|scheme)\b",
        r"(?i)\b(application status|file|reference|proceedings)\b",
        r"(?i)\b(policy|guidelines|criteria|procedure|process)\b",
    ]),
});

static HI_PATTERNS: Lazy<LanguagePatterns> = Lazy::new(|| LanguagePatterns {
    misuse: compile(&[
        r"(?i)\b(शिकायत|समस्या|परेशानी|मदद|हल|ठीक)\b",
        r"(?i)\b(व्यक्तिगत|निजी|मेरा|मेरी)\b",
        r"(?i)\b(क्यों|कब|कितना|दो|करो|व्यवस्था)\b",
        r"(?i)\b(कार्रवाई|निर्णय|आदेश|निर्देश)\b",
        r"(?i)\b(वेतन|पदोन्नति|स्थानांतरण)\b",
    ]),
    valid_request: compile(&[
        r"(?i)\b(जानकारी|विवरण|रिकॉर्ड|दस्तावेज|स्थिति|प्रति|सूची)\b",
        r"(?i)\b(बजट|आवंटन|व्यय|टेंडर|अनुबंध|योजना)\b",
        r"(?i)\b(आवेदन की स्थिति|फाइल|संदर्भ|कार्यवाही)\b",
        r"(?i)\b(नीति|दिशानिर्देश|मानदंड|प्रक्रिया)\b",
    ]),
});

static TE_PATTERNS: Lazy<LanguagePatterns> = Lazy::new(|| LanguagePatterns {
    misuse: compile(&[
        r"(?i)\b(ఫిర్యాదు|సమస్య|ఇబ్బంది|సహాయం|పరిష్కారం)\b",
        r"(?i)\b(వ్యక్తిగత|నా|నాకు)\b",
        r"(?i)\b(ఎందుకు|ఎప్పుడు|ఎంత|ఇవ్వండి|చేయండి)\b",
        r"(?i)\b(చర్య|నిర్ణయం|ఆర్డర్|ఆదేశం)\b",
        r"(?i)\b(జీతం|పదోన్నతి|బదిలీ)\b",
    ]),
    valid_request: compile(&[
        r"(?i)\b(సమాచారం|వివరాలు|రికార్డులు|పత్రాలు|స్థితి|కాపీ|జాబితా)\b",
        r"(?i)\b(బడ్జెట్|కేటాయింపు|వ్యయం|టెండర్|ఒప్పందం|పథకం)\b",
        r"(?i)\b(దరఖాస్తు స్థితి|ఫైలు|సూచన|కార్యకలాపాలు)\b",
        r"(?i)\b(విధానం|మార్గదర్శకాలు|ప్రమాణాలు|ప్రక్రియ)\b",
    ]),
});

pub fn patterns_for(language: Language) -> &'static LanguagePatterns {
    match language {
        Language::En => &EN_PATTERNS,
        Language::Hi => &HI_PATTERNS,
        Language::Te => &TE_PATTERNS,
    }
}

const EN_SUGGESTIONS: &[&str] = &[
    "Ask for specific information or documents",
    "Use phrases like \"Please provide information about...\"",
    "Request status of specific applications with reference numbers",
    "Ask for copies of relevant documents or records",
    "Inquire about government policies, schemes, or procedures",
];

const HI_SUGGESTIONS: &[&str] = &[
    "विशिष्ट जानकारी या दस्तावेजों के लिए पूछें",
    "\"कृपया ... के बारे में जानकारी प्रदान करें\" जैसे वाक्य का उपयोग करें",
    "संदर्भ संख्या के साथ विशिष्ट आवेदनों की स्थिति के लिए पूछें",
    "संबंधित दस्तावेजों या रिकॉर्ड की प्रतियों के लिए अनुरोध करें",
    "सरकारी नीतियों, योजनाओं या प्रक्रियाओं के बारे में पूछताछ करें",
];

const TE_SUGGESTIONS: &[&str] = &[
    "నిర్దిష్ట సమాచారం లేదా పత్రాల కోసం అడగండి",
    "\"దయచేసి ... గురించి సమాచారం అందించండి\" వంటి వాక్యాలను ఉపయోగించండి",
    "రిఫరెన్స్ నంబర్\u{200c}లతో నిర్దిష్ట దరఖాస్తుల స్థితి కోసం అడగండి",
    "సంబంధిత పత్రాలు లేదా రికార్డుల కాపీల కోసం అభ్యర్థించండి",
    "ప్రభుత్వ విధానాలు, పథకాలు లేదా ప్రక్రియల గురించి విచారించండి",
];

/// Ordered rewrite hints shown when an input is rejected as misuse.
pub fn suggestions_for(language: Language) -> &'static [&'static str] {
    match language {
        Language::En => EN_SUGGESTIONS,
        Language::Hi => HI_SUGGESTIONS,
        Language::Te => TE_SUGGESTIONS,
    }
}
