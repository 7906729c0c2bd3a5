use crate::i18n::MessageBundle;

/// Polish strings
pub const PL: MessageBundle = MessageBundle {
    direction: None,
    language_tag: None,

    // Shared
    greeting: "Cześć {name},",
    team_signature: "Zespół Amanoba",

    // Welcome
    welcome_subject: "Witamy w kursie {course}!",
    welcome_heading: "Twoja przygoda z nauką zaczyna się dziś",
    welcome_intro: "Zapisałeś się na kurs {course}. Przez najbliższe {days} dni codziennie otrzymasz jedną krótką lekcję.",
    welcome_tip: "Poświęć 10–15 minut dziennie, a do końca kursu zobaczysz prawdziwe postępy.",
    welcome_cta: "Zacznij naukę",

    // Completion
    completion_subject: "Gratulacje, ukończyłeś kurs {course}!",
    completion_heading: "Udało się, {name}!",
    completion_body: "Ukończyłeś wszystkie lekcje kursu {course}. Twój certyfikat jest już dostępny w panelu.",
    completion_recommended_heading: "Polecane kolejne kursy",
    completion_cta: "Przeglądaj więcej kursów",
    upsell_beginner: None,
    upsell_intermediate: None,
    upsell_advanced: None,

    // Reminder
    reminder_subject: "Dzień {day} kursu {course} czeka na Ciebie",
    reminder_heading: "Twoja lekcja na dzień {day} jest gotowa",
    reminder_body: "Nie przerywaj serii w kursie {course}. Dzisiejsza lekcja zajmie tylko kilka minut.",
    reminder_cta: "Otwórz dzień {day}",

    // Payment
    payment_subject: "Płatność potwierdzona: {course}",
    payment_heading: "Dziękujemy za zakup",
    payment_body: "Płatność za kurs {course} zakończyła się sukcesem, a Twój dostęp jest już aktywny.",
    payment_amount_label: "Zapłacona kwota",
    payment_expiry_label: "Dostęp ważny do",
    payment_transaction_label: "Identyfikator transakcji",
    payment_cta_course: "Zobacz kurs",
    payment_cta_browse: "Przeglądaj kursy",
    payment_support: "Masz pytania dotyczące płatności? Napisz do nas na {email}.",

    // Footers
    footer_lesson_reason: "Otrzymujesz tę wiadomość, ponieważ zapisałeś się na kurs {course}.",
    footer_payment_reason: "Otrzymujesz tę wiadomość, ponieważ dokonałeś zakupu w Amanoba.",
    footer_unsubscribe: "Wypisz się",
};
