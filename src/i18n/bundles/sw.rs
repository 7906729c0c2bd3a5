use crate::i18n::MessageBundle;

/// Swahili strings
pub const SW: MessageBundle = MessageBundle {
    direction: None,
    language_tag: None,

    // Shared
    greeting: "Habari {name},",
    team_signature: "Timu ya Amanoba",

    // Welcome
    welcome_subject: "Karibu kwenye {course}!",
    welcome_heading: "Safari yako ya kujifunza inaanza leo",
    welcome_intro: "Umejiandikisha kwenye {course}. Kwa siku {days} zijazo utapokea somo fupi moja kila siku.",
    welcome_tip: "Tenga dakika 10 hadi 15 kila siku na utaona maendeleo halisi kufikia mwisho wa kozi.",
    welcome_cta: "Anza kujifunza",

    // Completion
    completion_subject: "Hongera, umekamilisha {course}!",
    completion_heading: "Umefanikiwa, {name}!",
    completion_body: "Umemaliza masomo yote ya {course}. Cheti chako sasa kinapatikana kwenye dashibodi yako.",
    completion_recommended_heading: "Kozi zinazopendekezwa kufuata",
    completion_cta: "Tazama kozi zaidi",
    upsell_beginner: None,
    upsell_intermediate: None,
    upsell_advanced: None,

    // Reminder
    reminder_subject: "Siku ya {day} ya {course} inakusubiri",
    reminder_heading: "Somo lako la siku ya {day} liko tayari",
    reminder_body: "Endelea na mfululizo wako katika {course}. Somo la leo linachukua dakika chache tu.",
    reminder_cta: "Fungua siku ya {day}",

    // Payment
    payment_subject: "Malipo yamethibitishwa: {course}",
    payment_heading: "Asante kwa ununuzi wako",
    payment_body: "Malipo yako ya {course} yamefanikiwa na ufikiaji wako sasa uko hai.",
    payment_amount_label: "Kiasi kilicholipwa",
    payment_expiry_label: "Ufikiaji ni halali hadi",
    payment_transaction_label: "Nambari ya muamala",
    payment_cta_course: "Tazama kozi",
    payment_cta_browse: "Vinjari kozi",
    payment_support: "Una maswali kuhusu malipo yako? Tuandikie kwa {email}.",

    // Footers
    footer_lesson_reason: "Unapokea barua pepe hii kwa sababu umejiandikisha kwenye {course}.",
    footer_payment_reason: "Unapokea barua pepe hii kwa sababu ulifanya ununuzi kwenye Amanoba.",
    footer_unsubscribe: "Jiondoe",
};
