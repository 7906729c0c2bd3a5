use crate::i18n::MessageBundle;

/// Hindi strings
pub const HI: MessageBundle = MessageBundle {
    direction: None,
    language_tag: None,

    // Shared
    greeting: "नमस्ते {name},",
    team_signature: "Amanoba टीम",

    // Welcome
    welcome_subject: "{course} में आपका स्वागत है!",
    welcome_heading: "आपकी सीखने की यात्रा आज से शुरू होती है",
    welcome_intro: "आपने {course} में नामांकन किया है। अगले {days} दिनों तक आपको हर दिन एक छोटा पाठ मिलेगा।",
    welcome_tip: "हर दिन 10 से 15 मिनट निकालें और पाठ्यक्रम के अंत तक आप वास्तविक प्रगति देखेंगे।",
    welcome_cta: "सीखना शुरू करें",

    // Completion
    completion_subject: "बधाई हो, आपने {course} पूरा कर लिया!",
    completion_heading: "आपने कर दिखाया, {name}!",
    completion_body: "आपने {course} के सभी पाठ पूरे कर लिए हैं। आपका प्रमाणपत्र अब आपके डैशबोर्ड में उपलब्ध है।",
    completion_recommended_heading: "आपके लिए सुझाए गए अगले पाठ्यक्रम",
    completion_cta: "और पाठ्यक्रम देखें",
    upsell_beginner: None,
    upsell_intermediate: None,
    upsell_advanced: None,

    // Reminder
    reminder_subject: "{course} का दिन {day} आपका इंतज़ार कर रहा है",
    reminder_heading: "दिन {day} का आपका पाठ तैयार है",
    reminder_body: "{course} में अपनी निरंतरता बनाए रखें। आज का पाठ बस कुछ ही मिनट लेता है।",
    reminder_cta: "दिन {day} खोलें",

    // Payment
    payment_subject: "भुगतान की पुष्टि: {course}",
    payment_heading: "खरीदारी के लिए धन्यवाद",
    payment_body: "{course} के लिए आपका भुगतान सफल रहा और आपकी पहुँच अब सक्रिय है।",
    payment_amount_label: "भुगतान की गई राशि",
    payment_expiry_label: "पहुँच इस तारीख तक मान्य है",
    payment_transaction_label: "लेन-देन संख्या",
    payment_cta_course: "पाठ्यक्रम देखें",
    payment_cta_browse: "सभी पाठ्यक्रम ब्राउज़ करें",
    payment_support: "भुगतान के बारे में कोई प्रश्न? हमें {email} पर लिखें।",

    // Footers
    footer_lesson_reason: "आपको यह ईमेल इसलिए मिल रहा है क्योंकि आपने {course} में नामांकन किया है।",
    footer_payment_reason: "आपको यह ईमेल इसलिए मिल रहा है क्योंकि आपने Amanoba पर खरीदारी की है।",
    footer_unsubscribe: "सदस्यता समाप्त करें",
};
