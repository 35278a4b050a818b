//! Shared record-file fixtures for integration tests

#![allow(dead_code)]

/// Two persons, one family of nine, an Irish death place
pub const DUBLIN_FAMILY: &str = "\
0 HEAD
1 SOUR kinstory-tests
1 GEDC
2 VERS 5.5.1
0 @I1@ INDI
1 NAME Patrick /Murphy/
1 SEX M
1 BIRT
2 DATE 1850
1 DEAT
2 DATE ABT 1920
2 PLAC Dublin, Ireland
1 FAMS @F1@
0 @I2@ INDI
1 NAME Mary /Walsh/
1 SEX F
1 FAMS @F1@
0 @F1@ FAM
1 HUSB @I1@
1 WIFE @I2@
1 MARR
2 DATE 2 JUN 1875
2 PLAC Dublin, Ireland
1 CHIL @I3@
1 CHIL @I4@
1 CHIL @I5@
1 CHIL @I6@
1 CHIL @I7@
1 CHIL @I8@
1 CHIL @I9@
1 CHIL @I10@
1 CHIL @I11@
0 TRLR
";

/// Three generations crossing the Atlantic
pub const EMIGRANTS: &str = "\
0 HEAD
1 CHAR UTF-8
0 @I1@ INDI
1 NAME Johan /Berg/
1 BIRT
2 DATE 12 MAR 1832
2 PLAC Bergen, Hordaland, Norway
1 EMIG
2 DATE 1866
2 PLAC Bergen, Hordaland, Norway
1 IMMI
2 DATE 1866
2 PLAC New York, New York, USA
1 OCCU Carpenter
1 DEAT
2 DATE 1925
2 PLAC Decorah, Winneshiek, Iowa, USA
1 FAMS @F1@
0 @I2@ INDI
1 NAME Anna /Berg/
1 BIRT
2 DATE 1868
2 PLAC Decorah, Winneshiek, Iowa, USA
1 MARR
2 DATE 1888
2 PLAC Decorah, Winneshiek, Iowa, USA
1 MARR
2 DATE 1899
2 PLAC Minneapolis, Hennepin, Minnesota, USA
1 DEAT
2 DATE BEF 1910
1 FAMC @F1@
0 @I3@ INDI
1 NAME Erik /Berg/
1 BIRT
2 DATE 1891
2 PLAC Minneapolis, Hennepin, Minnesota, USA
1 MILI
2 DATE 1917
2 PLAC France
0 @F1@ FAM
1 HUSB @I1@
1 CHIL @I2@
0 TRLR
";
