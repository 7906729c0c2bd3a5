use crate::i18n::MessageBundle;

/// English strings (canonical, used as fallback for unknown locales)
pub const EN: MessageBundle = MessageBundle {
    direction: None,
    language_tag: None,

    // Shared
    greeting: "Hi {name},",
    team_signature: "The Amanoba team",

    // Welcome
    welcome_subject: "Welcome to {course}!",
    welcome_heading: "Your learning journey starts today",
    welcome_intro: "You have enrolled in {course}. For the next {days} days you will receive one short lesson every day.",
    welcome_tip: "Set aside 10 to 15 minutes a day and you will see real progress by the end of the course.",
    welcome_cta: "Start learning",

    // Completion
    completion_subject: "Congratulations, you completed {course}!",
    completion_heading: "You did it, {name}!",
    completion_body: "You finished every lesson of {course}. Your certificate is now available in your dashboard.",
    completion_recommended_heading: "Recommended next courses",
    completion_cta: "Browse more courses",
    upsell_beginner: Some(
        "New to this topic? These beginner-friendly courses build on what you just learned:",
    ),
    upsell_intermediate: Some("Ready for the next step? These courses take your skills further:"),
    upsell_advanced: Some("Looking for a challenge? These advanced courses go deeper:"),

    // Reminder
    reminder_subject: "Day {day} of {course} is waiting for you",
    reminder_heading: "Your lesson for day {day} is ready",
    reminder_body: "Keep your streak going in {course}. Today's lesson only takes a few minutes.",
    reminder_cta: "Open day {day}",

    // Payment
    payment_subject: "Payment confirmed: {course}",
    payment_heading: "Thank you for your purchase",
    payment_body: "Your payment for {course} was successful and your access is now active.",
    payment_amount_label: "Amount paid",
    payment_expiry_label: "Access valid until",
    payment_transaction_label: "Transaction ID",
    payment_cta_course: "View course",
    payment_cta_browse: "Browse courses",
    payment_support: "Questions about your payment? Write to us at {email}.",

    // Footers
    footer_lesson_reason: "You are receiving this email because you enrolled in {course}.",
    footer_payment_reason: "You are receiving this email because you made a purchase on Amanoba.",
    footer_unsubscribe: "Unsubscribe",
};
