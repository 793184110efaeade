//! $USER
//! $SRCFILE
