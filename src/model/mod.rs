pub mod transfer_qr_model;
