use crate::i18n::MessageBundle;

/// Vietnamese strings
pub const VI: MessageBundle = MessageBundle {
    direction: None,
    language_tag: None,

    // Shared
    greeting: "Xin chào {name},",
    team_signature: "Đội ngũ Amanoba",

    // Welcome
    welcome_subject: "Chào mừng bạn đến với {course}!",
    welcome_heading: "Hành trình học tập của bạn bắt đầu từ hôm nay",
    welcome_intro: "Bạn đã đăng ký khóa học {course}. Trong {days} ngày tới, mỗi ngày bạn sẽ nhận được một bài học ngắn.",
    welcome_tip: "Hãy dành 10 đến 15 phút mỗi ngày và bạn sẽ thấy tiến bộ thực sự khi kết thúc khóa học.",
    welcome_cta: "Bắt đầu học",

    // Completion
    completion_subject: "Chúc mừng, bạn đã hoàn thành {course}!",
    completion_heading: "Bạn đã làm được, {name}!",
    completion_body: "Bạn đã hoàn thành tất cả bài học của {course}. Chứng chỉ của bạn hiện có trong bảng điều khiển.",
    completion_recommended_heading: "Các khóa học tiếp theo được đề xuất",
    completion_cta: "Xem thêm khóa học",
    upsell_beginner: None,
    upsell_intermediate: None,
    upsell_advanced: None,

    // Reminder
    reminder_subject: "Ngày {day} của {course} đang chờ bạn",
    reminder_heading: "Bài học ngày {day} của bạn đã sẵn sàng",
    reminder_body: "Hãy duy trì chuỗi ngày học của bạn trong {course}. Bài học hôm nay chỉ mất vài phút.",
    reminder_cta: "Mở ngày {day}",

    // Payment
    payment_subject: "Thanh toán thành công: {course}",
    payment_heading: "Cảm ơn bạn đã mua hàng",
    payment_body: "Bạn đã thanh toán thành công cho {course} và quyền truy cập của bạn đã được kích hoạt.",
    payment_amount_label: "Số tiền đã thanh toán",
    payment_expiry_label: "Quyền truy cập có hiệu lực đến",
    payment_transaction_label: "Mã giao dịch",
    payment_cta_course: "Xem khóa học",
    payment_cta_browse: "Duyệt các khóa học",
    payment_support: "Có câu hỏi về thanh toán? Hãy viết cho chúng tôi tại {email}.",

    // Footers
    footer_lesson_reason: "Bạn nhận được email này vì bạn đã đăng ký {course}.",
    footer_payment_reason: "Bạn nhận được email này vì bạn đã mua hàng trên Amanoba.",
    footer_unsubscribe: "Hủy đăng ký",
};
