/// CodePen embeds live at `<user>/embed/<pen>`.
pub fn codepen_id(captures: &[&str]) -> String {
    captures.join("/embed/")
}
