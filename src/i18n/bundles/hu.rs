use crate::i18n::MessageBundle;

/// Hungarian strings
pub const HU: MessageBundle = MessageBundle {
    direction: None,
    language_tag: None,

    // Shared
    greeting: "Szia {name}!",
    team_signature: "Az Amanoba csapata",

    // Welcome
    welcome_subject: "Üdvözlünk a(z) {course} kurzuson!",
    welcome_heading: "Ma kezdődik a tanulási utad",
    welcome_intro: "Beiratkoztál a(z) {course} kurzusra. A következő {days} napban minden nap kapsz egy rövid leckét.",
    welcome_tip: "Szánj rá naponta 10–15 percet, és a kurzus végére valódi fejlődést fogsz látni.",
    welcome_cta: "Kezdjük a tanulást",

    // Completion
    completion_subject: "Gratulálunk, elvégezted a(z) {course} kurzust!",
    completion_heading: "Sikerült, {name}!",
    completion_body: "A(z) {course} minden leckéjét teljesítetted. A tanúsítványod már elérhető az irányítópulton.",
    completion_recommended_heading: "Ajánlott következő kurzusok",
    completion_cta: "További kurzusok böngészése",
    upsell_beginner: None,
    upsell_intermediate: None,
    upsell_advanced: None,

    // Reminder
    reminder_subject: "A(z) {course} {day}. napja vár rád",
    reminder_heading: "Elkészült a {day}. napi leckéd",
    reminder_body: "Folytasd a sorozatot a(z) {course} kurzusban. A mai lecke csak néhány percet vesz igénybe.",
    reminder_cta: "A {day}. nap megnyitása",

    // Payment
    payment_subject: "Sikeres fizetés: {course}",
    payment_heading: "Köszönjük a vásárlást",
    payment_body: "A(z) {course} kurzus kifizetése sikeres volt, a hozzáférésed már aktív.",
    payment_amount_label: "Fizetett összeg",
    payment_expiry_label: "Hozzáférés érvényes eddig",
    payment_transaction_label: "Tranzakcióazonosító",
    payment_cta_course: "Kurzus megtekintése",
    payment_cta_browse: "Kurzusok böngészése",
    payment_support: "Kérdésed van a fizetéssel kapcsolatban? Írj nekünk: {email}.",

    // Footers
    footer_lesson_reason: "Azért kapod ezt az e-mailt, mert beiratkoztál a(z) {course} kurzusra.",
    footer_payment_reason: "Azért kapod ezt az e-mailt, mert vásároltál az Amanoba oldalon.",
    footer_unsubscribe: "Leiratkozás",
};
