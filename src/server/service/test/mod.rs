mod attendance;
mod exam_result;
mod notification;
