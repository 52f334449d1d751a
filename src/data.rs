pub const WIDTH: usize = 4;
pub const CELLS: usize = WIDTH * WIDTH;

pub const ANCHOR: u8 = b'+';
pub const BLANK: u8 = b'_';

/// Cells which always hold an anchor - the blank can never swap with them.
pub const ANCHORS: [usize; 4] = [0, 3, 8, 12];

/// The task set the puzzle comes with.
pub const LITERAL_TASKS: [(&str, &str); 16] = [
    ("+dd+b_cb+dda+abd", "+_a+bddd+dba+dbc"),
    ("+dd+bdab+ddc+ab_", "+ad+_bda+dbd+dcb"),
    ("+ba+bdad+bdd+_dc", "+bd+badd+a_b+cdd"),
    ("+dd+bbda+bcd+a_d", "+bd+bbdd+aac+d_d"),
    ("+bd+bcd_+dda+dba", "+bd+_bcd+dba+dad"),
    ("+da+bdad+d_d+cbb", "+da+bdad+dbd+cb_"),
    ("+da+bdba+d_d+bdc", "+bd+ba_a+ddc+bdd"),
    ("+bd+bbdd+aac+dd_", "+da+bbdd+d_a+cbd"),
    ("+ab+bdcd+b_a+ddd", "+bd+bacd+da_+bdd"),
    ("+ad+bd_d+bba+dcd", "+ad+bdba+dbd+d_c"),
    ("+_b+bdad+dad+cdb", "+dd+bdba+bda+c_d"),
    ("+_d+bbcd+baa+ddd", "+_a+bdbd+cab+ddd"),
    ("+_d+bbdd+daa+cdb", "+ba+bd_d+bcd+add"),
    ("+dc+b_dd+bad+bad", "+dd+bd_a+cda+dbb"),
    ("+ad+bddd+da_+bbc", "+ad+b_dd+dab+dbc"),
    ("+ad+bd_c+bdd+bad", "+ad+b_dc+bdd+bda"),
];

#[inline]
pub fn is_anchor(index: usize) -> bool {
    ANCHORS.contains(&index)
}
