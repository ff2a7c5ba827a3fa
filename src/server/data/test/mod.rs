mod exam_result;
mod notification;
mod student;
