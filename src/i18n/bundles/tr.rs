use crate::i18n::MessageBundle;

/// Turkish strings
pub const TR: MessageBundle = MessageBundle {
    direction: None,
    language_tag: None,

    // Shared
    greeting: "Merhaba {name},",
    team_signature: "Amanoba ekibi",

    // Welcome
    welcome_subject: "{course} kursuna hoş geldin!",
    welcome_heading: "Öğrenme yolculuğun bugün başlıyor",
    welcome_intro: "{course} kursuna kaydoldun. Önümüzdeki {days} gün boyunca her gün kısa bir ders alacaksın.",
    welcome_tip: "Her gün 10-15 dakika ayır; kursun sonunda gerçek bir ilerleme göreceksin.",
    welcome_cta: "Öğrenmeye başla",

    // Completion
    completion_subject: "Tebrikler, {course} kursunu tamamladın!",
    completion_heading: "Başardın, {name}!",
    completion_body: "{course} kursunun tüm derslerini bitirdin. Sertifikan artık panelinde seni bekliyor.",
    completion_recommended_heading: "Önerilen sonraki kurslar",
    completion_cta: "Daha fazla kursa göz at",
    upsell_beginner: None,
    upsell_intermediate: None,
    upsell_advanced: None,

    // Reminder
    reminder_subject: "{course} kursunun {day}. günü seni bekliyor",
    reminder_heading: "{day}. gün dersin hazır",
    reminder_body: "{course} kursundaki serini sürdür. Bugünkü ders yalnızca birkaç dakika sürüyor.",
    reminder_cta: "{day}. günü aç",

    // Payment
    payment_subject: "Ödeme onaylandı: {course}",
    payment_heading: "Satın aldığın için teşekkürler",
    payment_body: "{course} için ödemen başarıyla alındı ve erişimin artık aktif.",
    payment_amount_label: "Ödenen tutar",
    payment_expiry_label: "Erişim bitiş tarihi",
    payment_transaction_label: "İşlem numarası",
    payment_cta_course: "Kursu görüntüle",
    payment_cta_browse: "Kurslara göz at",
    payment_support: "Ödemenle ilgili soruların mı var? Bize {email} adresinden yaz.",

    // Footers
    footer_lesson_reason: "Bu e-postayı {course} kursuna kayıtlı olduğun için alıyorsun.",
    footer_payment_reason: "Bu e-postayı Amanoba üzerinden satın alma yaptığın için alıyorsun.",
    footer_unsubscribe: "Abonelikten çık",
};
