use crate::i18n::MessageBundle;

/// Indonesian strings
pub const ID: MessageBundle = MessageBundle {
    direction: None,
    language_tag: None,

    // Shared
    greeting: "Hai {name},",
    team_signature: "Tim Amanoba",

    // Welcome
    welcome_subject: "Selamat datang di {course}!",
    welcome_heading: "Perjalanan belajarmu dimulai hari ini",
    welcome_intro: "Kamu telah mendaftar di {course}. Selama {days} hari ke depan kamu akan menerima satu pelajaran singkat setiap hari.",
    welcome_tip: "Luangkan 10 sampai 15 menit setiap hari dan kamu akan melihat kemajuan nyata di akhir kursus.",
    welcome_cta: "Mulai belajar",

    // Completion
    completion_subject: "Selamat, kamu telah menyelesaikan {course}!",
    completion_heading: "Kamu berhasil, {name}!",
    completion_body: "Kamu telah menyelesaikan semua pelajaran {course}. Sertifikatmu kini tersedia di dasbor.",
    completion_recommended_heading: "Kursus berikutnya yang direkomendasikan",
    completion_cta: "Jelajahi kursus lainnya",
    upsell_beginner: None,
    upsell_intermediate: None,
    upsell_advanced: None,

    // Reminder
    reminder_subject: "Hari ke-{day} dari {course} menunggumu",
    reminder_heading: "Pelajaran hari ke-{day} sudah siap",
    reminder_body: "Pertahankan konsistensimu di {course}. Pelajaran hari ini hanya butuh beberapa menit.",
    reminder_cta: "Buka hari ke-{day}",

    // Payment
    payment_subject: "Pembayaran berhasil: {course}",
    payment_heading: "Terima kasih atas pembelianmu",
    payment_body: "Pembayaran untuk {course} berhasil dan aksesmu kini sudah aktif.",
    payment_amount_label: "Jumlah dibayar",
    payment_expiry_label: "Akses berlaku hingga",
    payment_transaction_label: "ID transaksi",
    payment_cta_course: "Lihat kursus",
    payment_cta_browse: "Jelajahi kursus",
    payment_support: "Ada pertanyaan tentang pembayaran? Hubungi kami di {email}.",

    // Footers
    footer_lesson_reason: "Kamu menerima email ini karena terdaftar di {course}.",
    footer_payment_reason: "Kamu menerima email ini karena melakukan pembelian di Amanoba.",
    footer_unsubscribe: "Berhenti berlangganan",
};
